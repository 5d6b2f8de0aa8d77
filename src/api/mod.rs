// Content API modules
pub mod client;
pub mod content;
pub mod error;

// Re-export commonly used functions
pub use client::{build_http_client, extract_data, fetch_text, graphql_query};
pub use content::{fetch_content, snapshot_from_response, SITE_CONTENT_QUERY};
pub use error::ApiError;
