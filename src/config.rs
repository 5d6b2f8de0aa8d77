use std::env;
use std::path::Path;

use serde::Serialize;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CONTENT_FILE: &str = "content.json";
pub const DEFAULT_OUTPUT_DIR: &str = "public";
pub const DEFAULT_CONTENT_API_URL: &str = "https://graphql.datocms.com/";
pub const DEFAULT_PLANS_URL: &str = "https://site-api.datocms.com/plans";
pub const DEFAULT_API_TOKEN: &str = "";
pub const DEFAULT_SITE_URL: &str = "";
pub const DEFAULT_PRODUCT_NAME: &str = "DatoCMS";
pub const DEFAULT_SIGNUP_URL: &str = "https://dashboard.datocms.com/signup";
pub const DEFAULT_SUPPORT_EMAIL: &str = "support@datocms.com";
pub const DEFAULT_CHANGELOG_PER_PAGE: usize = 10;
pub const DEFAULT_ACTIVE_PLAN: &str = "28";

/// Everything the page templates and the pricing table need from the environment.
#[derive(Debug, Clone, Serialize)]
pub struct SiteSettings {
    pub site_url: String,
    pub product_name: String,
    pub signup_url: String,
    pub support_email: String,
    pub changelog_per_page: usize,
    pub default_active_plan: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            site_url: sanitize_base_url(DEFAULT_SITE_URL),
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            signup_url: DEFAULT_SIGNUP_URL.to_string(),
            support_email: DEFAULT_SUPPORT_EMAIL.to_string(),
            changelog_per_page: DEFAULT_CHANGELOG_PER_PAGE,
            default_active_plan: DEFAULT_ACTIVE_PLAN.to_string(),
        }
    }
}

impl SiteSettings {
    pub fn from_env() -> Self {
        SiteSettings {
            site_url: get_site_url(),
            product_name: get_product_name(),
            signup_url: env::var("SIGNUP_URL").unwrap_or_else(|_| DEFAULT_SIGNUP_URL.to_string()),
            support_email: env::var("SUPPORT_EMAIL").unwrap_or_else(|_| DEFAULT_SUPPORT_EMAIL.to_string()),
            changelog_per_page: get_changelog_per_page(),
            default_active_plan: env::var("DEFAULT_ACTIVE_PLAN")
                .unwrap_or_else(|_| DEFAULT_ACTIVE_PLAN.to_string()),
        }
    }

    pub fn support_mailto(&self) -> String {
        format!("mailto:{}", self.support_email)
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_token() -> String {
    env::var("DATOCMS_API_TOKEN").unwrap_or_else(|_| DEFAULT_API_TOKEN.to_string())
}

pub fn get_content_api_url() -> String {
    env::var("CONTENT_API_URL").unwrap_or_else(|_| DEFAULT_CONTENT_API_URL.to_string())
}

pub fn get_plans_url() -> String {
    env::var("PLANS_URL").unwrap_or_else(|_| DEFAULT_PLANS_URL.to_string())
}

pub fn get_site_url() -> String {
    sanitize_base_url(&env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string()))
}

pub fn get_product_name() -> String {
    let raw = env::var("PRODUCT_NAME").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_PRODUCT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn get_changelog_per_page() -> usize {
    let raw = env::var("CHANGELOG_PER_PAGE").unwrap_or_default();
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => n,
        Ok(_) => DEFAULT_CHANGELOG_PER_PAGE,
        Err(_) => {
            if !raw.trim().is_empty() {
                tracing::warn!(value = %raw, "Ignoring invalid CHANGELOG_PER_PAGE");
            }
            DEFAULT_CHANGELOG_PER_PAGE
        }
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        format!("http://localhost:{}", DEFAULT_PORT)
    } else {
        trimmed.to_string()
    }
}
