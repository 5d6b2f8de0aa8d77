/// Error types for site generation
use thiserror::Error;

use crate::content::LoaderError;

#[derive(Debug, Error)]
pub enum SiteError {
    /// Content snapshot or plans payload could not be decoded
    #[error(transparent)]
    Content(#[from] LoaderError),

    /// A template failed to render
    #[error("Template render error: {0}")]
    Template(#[from] askama::Error),

    /// JSON export failed
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output tree failed
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Progress bar template was rejected
    #[error("Progress style error: {0}")]
    Progress(String),
}
