use serde::Serialize;

use crate::config::SiteSettings;
use crate::content::ContentSnapshot;
use crate::models::{Customer, Feature, Integration, Review};
use crate::utils::page_path;

/// View model for one integration landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingPage<'a> {
    pub path: String,
    pub hero_title: String,
    pub hero_description: String,
    pub signup_url: String,
    pub integration: &'a Integration,
    pub customers: &'a [Customer],
    pub features: &'a [Feature],
    pub reviews: &'a [Review],
}

pub fn landing_path(slug: &str) -> String {
    page_path(&["cms", slug])
}

pub fn hero_title(product_name: &str, integration_name: &str) -> String {
    format!("Build your next {} project with {}", integration_name, product_name)
}

pub fn hero_description(integration_name: &str) -> String {
    format!(
        "Stop reinventing the wheel: use our intuitive REST API to deliver content to your {} application.",
        integration_name
    )
}

/// Slugs become directory names, so only a conservative character set is allowed.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// One landing page per integration with a usable slug.
pub fn landing_pages<'a>(snapshot: &'a ContentSnapshot, settings: &SiteSettings) -> Vec<LandingPage<'a>> {
    snapshot
        .integrations
        .iter()
        .filter(|integration| {
            let ok = is_valid_slug(&integration.slug);
            if !ok {
                tracing::warn!(slug = %integration.slug, name = %integration.name, "Skipping integration with unusable slug");
            }
            ok
        })
        .map(|integration| LandingPage {
            path: landing_path(&integration.slug),
            hero_title: hero_title(&settings.product_name, &integration.name),
            hero_description: hero_description(&integration.name),
            signup_url: settings.signup_url.clone(),
            integration,
            customers: &snapshot.who_is_using,
            features: &snapshot.features,
            reviews: &snapshot.reviews,
        })
        .collect()
}
