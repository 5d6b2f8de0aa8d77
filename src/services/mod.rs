pub mod changelog_service;
pub mod error;
pub mod landing_service;
pub mod site_builder;

// Re-export commonly used items
pub use changelog_service::{changelog_path, paginate, ChangelogPage};
pub use error::SiteError;
pub use landing_service::{landing_pages, landing_path, LandingPage};
pub use site_builder::{pricing_path, BuildReport, OutputFile, SiteBuilder, PRICING_JSON_FILE};
