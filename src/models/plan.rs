use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A pricing tier as published by the CMS, sorted by `position` upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub api_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub most_popular: bool,
    #[serde(default)]
    pub promo_title: Option<String>,
    #[serde(default)]
    pub promo_description: Option<String>,
}

impl Plan {
    /// Promo title, if one is set and non-blank.
    pub fn promo_title(&self) -> Option<&str> {
        self.promo_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
