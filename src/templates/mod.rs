pub mod base_template;
pub mod changelog_page_template;
pub mod landing_page_template;
pub mod pricing_page_template;

pub use base_template::BaseTemplate;
pub use changelog_page_template::ChangelogPageTemplate;
pub use landing_page_template::LandingPageTemplate;
pub use pricing_page_template::PricingPageTemplate;
