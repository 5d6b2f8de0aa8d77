#![allow(dead_code)]

use dato_site::config::SiteSettings;
use dato_site::content::ContentSnapshot;
use dato_site::pricing::PricingData;

pub const SAMPLE_CONTENT: &str = include_str!("../fixtures/content.json");

pub fn sample_snapshot() -> ContentSnapshot {
    ContentSnapshot::from_json(SAMPLE_CONTENT).unwrap()
}

pub fn sample_pricing() -> PricingData {
    PricingData::from_snapshot(&sample_snapshot()).unwrap()
}

pub fn test_settings() -> SiteSettings {
    SiteSettings {
        site_url: "https://www.example.com".to_string(),
        ..SiteSettings::default()
    }
}
