use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// A static-site generator or framework with a dedicated landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub logo: Option<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documentation_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// HTML
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    /// HTML
    #[serde(default, deserialize_with = "null_as_default")]
    pub quote: String,
    #[serde(default)]
    pub image: Option<Image>,
}

/// A logo in the "who is using" strip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub logo: Option<Image>,
}

impl Customer {
    pub fn logo_url(&self) -> &str {
        self.logo.as_ref().map(|l| l.url.as_str()).unwrap_or("")
    }
}

impl Integration {
    pub fn logo_url(&self) -> &str {
        self.logo.as_ref().map(|l| l.url.as_str()).unwrap_or("")
    }
}

impl Feature {
    pub fn image_url(&self) -> &str {
        self.image.as_ref().map(|l| l.url.as_str()).unwrap_or("")
    }
}

impl Review {
    pub fn image_url(&self) -> &str {
        self.image.as_ref().map(|l| l.url.as_str()).unwrap_or("")
    }
}
