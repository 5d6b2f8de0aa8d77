use std::path::PathBuf;
use std::sync::Arc;

use crate::config::SiteSettings;
use crate::pricing::PricingData;

/// Shared, read-only state of the preview server.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<SiteSettings>,
    pub pricing: Arc<PricingData>,
    pub output_dir: PathBuf,
}

impl AppState {
    pub fn new(settings: SiteSettings, pricing: PricingData, output_dir: PathBuf) -> Self {
        AppState {
            settings: Arc::new(settings),
            pricing: Arc::new(pricing),
            output_dir,
        }
    }
}
