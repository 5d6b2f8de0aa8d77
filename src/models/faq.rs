use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    /// Answer already rendered to HTML by the CMS.
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
}
