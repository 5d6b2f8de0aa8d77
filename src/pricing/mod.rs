//! Pricing reconciliation: plan payload + hints -> pricing table.

mod billing;
mod reconciler;
mod table;

pub use billing::Billing;
pub use reconciler::{extra_packet_for, resolve_value, PlanTier};
pub use table::{
    limit_label, packet_footnote, CallToAction, FeatureCell, FeatureRow, PlanColumn, PlanTab, PriceCell,
    PricingTable, Promo, RecapCard, RecapSpec, Selection, HIDDEN_ROW_KEYS, RECAP_SPECS,
};

use crate::content::{load_plan_attributes, ContentSnapshot, LoaderError};
use crate::models::{DisplayValue, Hint, Hints, Plan, PlanCatalog};

/// The three read-only inputs the pricing page is computed from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingData {
    pub plans: Vec<Plan>,
    pub hints: Hints,
    pub catalog: PlanCatalog,
}

impl PricingData {
    pub fn new(plans: Vec<Plan>, hints: Hints, catalog: PlanCatalog) -> Self {
        PricingData { plans, hints, catalog }
    }

    /// Decode the plans payload and index the hints of a snapshot.
    pub fn from_snapshot(snapshot: &ContentSnapshot) -> Result<Self, LoaderError> {
        let catalog = load_plan_attributes(&snapshot.dato_plans.body)?;
        let hints = Hints::from_records(&snapshot.hints);

        for plan in &snapshot.plans {
            if catalog.find(&plan.api_id).is_none() {
                tracing::debug!(plan = %plan.api_id, name = %plan.name, "No plan attributes; treating as enterprise");
            }
        }

        Ok(PricingData::new(snapshot.plans.clone(), hints, catalog))
    }

    pub fn tier(&self, plan: &Plan) -> PlanTier {
        PlanTier::classify(self.catalog.find(&plan.api_id))
    }

    pub fn resolve(&self, plan: &Plan, key: &str, hint: Option<&Hint>) -> DisplayValue {
        resolve_value(plan, key, hint, self.catalog.find(&plan.api_id))
    }
}
