use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::LoaderError;
use crate::models::{ChangelogEntry, Customer, Faq, Feature, HintRecord, Integration, Plan, Review};

/// The serialized plans payload, passed through untouched by the CMS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlansBlob {
    #[serde(default)]
    pub body: String,
}

/// Everything the site is built from, as fetched from the content API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentSnapshot {
    pub plans: Vec<Plan>,
    pub hints: Vec<HintRecord>,
    pub dato_plans: PlansBlob,
    pub faqs: Vec<Faq>,
    pub changelog_entries: Vec<ChangelogEntry>,
    pub integrations: Vec<Integration>,
    pub features: Vec<Feature>,
    pub reviews: Vec<Review>,
    pub who_is_using: Vec<Customer>,
}

impl ContentSnapshot {
    pub fn from_json(text: &str) -> Result<Self, LoaderError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and decode a snapshot file.
    pub async fn load(path: &Path) -> Result<Self, LoaderError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoaderError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let snapshot = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            plans = snapshot.plans.len(),
            hints = snapshot.hints.len(),
            changelog_entries = snapshot.changelog_entries.len(),
            integrations = snapshot.integrations.len(),
            "Loaded content snapshot"
        );
        Ok(snapshot)
    }

    pub fn to_json_pretty(&self) -> Result<String, LoaderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
