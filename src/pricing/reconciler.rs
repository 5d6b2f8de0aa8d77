use serde::Serialize;

use crate::models::{
    AttributeValue, DisplayValue, ExtraPacket, Hint, HintOverride, Plan, PlanAttributes, PlanCatalog,
};
use crate::utils::format_value;

use super::billing::Billing;

/// Resolve what one pricing-table cell shows for `plan` and `key`.
///
/// The plan payload wins whenever it carries `key`; otherwise the hint's
/// per-plan override is used, and a missing override reads "Custom".
pub fn resolve_value(
    plan: &Plan,
    key: &str,
    hint: Option<&Hint>,
    attributes: Option<&PlanAttributes>,
) -> DisplayValue {
    if let Some(value) = attributes.and_then(|a| a.get(key)) {
        return match value {
            AttributeValue::Unlimited => DisplayValue::Unlimited,
            AttributeValue::Flag(true) => DisplayValue::CheckIcon,
            AttributeValue::Flag(false) => DisplayValue::Unavailable,
            AttributeValue::Number(_) => DisplayValue::FormattedNumber(format_value(key, value)),
            AttributeValue::Text(_) if key.ends_with("Bytes") => {
                DisplayValue::FormattedNumber(format_value(key, value))
            }
            other => DisplayValue::RawString(format_value(key, other)),
        };
    }

    match hint.and_then(|h| h.override_for(&plan.api_id)) {
        Some(HintOverride::Check) => DisplayValue::CheckIcon,
        Some(HintOverride::Text(text)) => DisplayValue::RawString(text.clone()),
        None => DisplayValue::CustomLabel,
    }
}

/// First packet pricing for `hint_key` across `plans`, in list order.
pub fn extra_packet_for(hint_key: &str, plans: &[Plan], catalog: &PlanCatalog) -> Option<ExtraPacket> {
    plans
        .iter()
        .filter_map(|plan| catalog.find(&plan.api_id))
        .find_map(|attrs| attrs.packet(hint_key))
}

/// Pricing class of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlanTier {
    /// Has attributes and a monthly price of zero.
    Free,
    /// No attributes at all: custom quote.
    Enterprise,
    Paid {
        monthly_price: Option<f64>,
        yearly_price: Option<f64>,
    },
}

impl PlanTier {
    pub fn classify(attributes: Option<&PlanAttributes>) -> Self {
        match attributes {
            None => PlanTier::Enterprise,
            Some(attrs) => match attrs.monthly_price() {
                Some(price) if price == 0.0 => PlanTier::Free,
                monthly_price => PlanTier::Paid {
                    monthly_price,
                    yearly_price: attrs.yearly_price(),
                },
            },
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, PlanTier::Free)
    }

    pub fn is_enterprise(&self) -> bool {
        matches!(self, PlanTier::Enterprise)
    }

    /// Monthly amount to display for `billing`. Yearly prices are spread over
    /// twelve months and rounded down.
    pub fn monthly_amount(&self, billing: Billing) -> Option<f64> {
        match (self, billing) {
            (PlanTier::Paid { monthly_price, .. }, Billing::Monthly) => *monthly_price,
            (PlanTier::Paid { yearly_price, .. }, Billing::Yearly) => yearly_price.map(|y| (y / 12.0).floor()),
            _ => None,
        }
    }
}
