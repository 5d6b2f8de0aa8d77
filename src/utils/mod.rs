// Display formatting
pub mod format;
pub mod camelize;

// URL handling utilities
pub mod url_builder;

pub use format::{format_number, format_price, format_value, number_with_commas, pretty_bytes};
pub use camelize::camelize;
pub use url_builder::{absolute_url, page_path};
