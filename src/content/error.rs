/// Error types for loading content
use thiserror::Error;

/// Errors raised while decoding CMS content. All of them abort the build.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The payload is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is JSON but not the flatted layout
    #[error("Malformed plans payload: {0}")]
    Malformed(String),

    /// A reference points back at one of its own ancestors
    #[error("Cyclic reference at entry {0} cannot be expanded into plain records")]
    Cycle(usize),

    /// The decoded plans do not have the expected shape
    #[error("Unexpected plan record shape: {0}")]
    Shape(String),

    /// Reading the snapshot file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
