/// Error types for the content API client
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No API token was configured
    #[error("DATOCMS_API_TOKEN is not configured")]
    MissingToken,

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}: {body}")]
    Status { status: u16, url: String, body: String },

    /// The GraphQL response carried an `errors` array
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}
