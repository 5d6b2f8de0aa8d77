use serde::Serialize;

use crate::config::SiteSettings;
use crate::models::{DisplayValue, ExtraPacket, Hint, Plan};
use crate::utils::{format_number, format_price};

use super::billing::Billing;
use super::reconciler::{extra_packet_for, PlanTier};
use super::PricingData;

/// Hints that only make sense in the recap cards, never as comparison rows.
pub const HIDDEN_ROW_KEYS: [&str; 2] = ["items", "uploadableBytes"];

/// Attributes summarized on each paid plan's recap card, with their unit word.
pub const RECAP_SPECS: [(&str, &str); 4] = [
    ("itemTypes", "models"),
    ("locales", "locales"),
    ("users", "users"),
    ("roles", "roles"),
];

/// Plan hidden from the plan switcher.
const SWITCHER_EXCLUDED_PLAN: &str = "Developer";

/// UI state the table is rendered for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub active_plan: String,
    pub billing: Billing,
}

impl Selection {
    pub fn new(active_plan: impl Into<String>, billing: Billing) -> Self {
        Selection {
            active_plan: active_plan.into(),
            billing,
        }
    }

    pub fn from_settings(settings: &SiteSettings, billing: Billing) -> Self {
        Selection::new(settings.default_active_plan.clone(), billing)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanTab {
    pub api_id: String,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Promo {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecapSpec {
    pub key: String,
    pub unit: String,
    pub tooltip: String,
    pub value: DisplayValue,
}

/// Summary card shown above the comparison table. Free plans get none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecapCard {
    pub api_id: String,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub most_popular: bool,
    pub tier: PlanTier,
    pub price: PriceCell,
    pub promo: Option<Promo>,
    pub specs: Vec<RecapSpec>,
}

impl RecapCard {
    pub fn is_enterprise(&self) -> bool {
        self.tier.is_enterprise()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "camelCase")]
pub enum PriceCell {
    Free,
    /// Enterprise: no price, get in touch.
    Talk,
    Amount(String),
}

impl PriceCell {
    fn for_tier(tier: &PlanTier, billing: Billing) -> Self {
        match tier {
            PlanTier::Free => PriceCell::Free,
            PlanTier::Enterprise => PriceCell::Talk,
            PlanTier::Paid { .. } => PriceCell::Amount(
                tier.monthly_amount(billing)
                    .map(format_price)
                    .unwrap_or_else(|| "-".to_string()),
            ),
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, PriceCell::Free)
    }

    pub fn is_talk(&self) -> bool {
        matches!(self, PriceCell::Talk)
    }

    pub fn amount(&self) -> Option<&str> {
        match self {
            PriceCell::Amount(a) => Some(a),
            _ => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PriceCell::Free => "Free",
            PriceCell::Talk => "Let's talk",
            PriceCell::Amount(a) => a,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanColumn {
    pub api_id: String,
    pub name: String,
    pub active: bool,
    pub price: PriceCell,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCell {
    pub plan_id: String,
    pub active: bool,
    pub value: DisplayValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    pub key: String,
    pub name: String,
    pub description: String,
    pub footnote: Option<String>,
    pub cells: Vec<FeatureCell>,
}

/// The whole pricing page, resolved for one [`Selection`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingTable {
    pub selection: Selection,
    pub switcher: Vec<PlanTab>,
    pub recap: Vec<RecapCard>,
    pub columns: Vec<PlanColumn>,
    pub rows: Vec<FeatureRow>,
}

impl PricingTable {
    pub fn build(data: &PricingData, selection: &Selection, settings: &SiteSettings) -> Self {
        let switcher = data
            .plans
            .iter()
            .filter(|p| p.name != SWITCHER_EXCLUDED_PLAN)
            .map(|p| PlanTab {
                api_id: p.api_id.clone(),
                name: p.name.clone(),
                active: p.api_id == selection.active_plan,
            })
            .collect();

        let recap = data
            .plans
            .iter()
            .filter_map(|plan| recap_card(data, plan, selection))
            .collect();

        let columns = data
            .plans
            .iter()
            .map(|plan| {
                let tier = data.tier(plan);
                let cta = if tier.is_enterprise() {
                    CallToAction {
                        label: "Get in touch".into(),
                        href: settings.support_mailto(),
                    }
                } else {
                    CallToAction {
                        label: "Sign up".into(),
                        href: settings.signup_url.clone(),
                    }
                };
                PlanColumn {
                    api_id: plan.api_id.clone(),
                    name: plan.name.clone(),
                    active: plan.api_id == selection.active_plan,
                    price: PriceCell::for_tier(&tier, selection.billing),
                    cta,
                }
            })
            .collect();

        let rows = data
            .hints
            .iter()
            .filter(|h| !HIDDEN_ROW_KEYS.contains(&h.key.as_str()))
            .map(|hint| feature_row(data, hint, selection))
            .collect();

        PricingTable {
            selection: selection.clone(),
            switcher,
            recap,
            columns,
            rows,
        }
    }
}

fn recap_card(data: &PricingData, plan: &Plan, selection: &Selection) -> Option<RecapCard> {
    let tier = data.tier(plan);
    if tier.is_free() {
        return None;
    }

    let promo = match (selection.billing, plan.promo_title()) {
        (Billing::Yearly, Some(title)) => Some(Promo {
            title: title.to_string(),
            description: plan.promo_description.clone().unwrap_or_default(),
        }),
        _ => None,
    };

    let specs = if tier.is_enterprise() {
        Vec::new()
    } else {
        RECAP_SPECS
            .iter()
            .map(|(key, unit)| {
                let hint = data.hints.get(key);
                RecapSpec {
                    key: key.to_string(),
                    unit: unit.to_string(),
                    tooltip: hint.map(|h| h.description.clone()).unwrap_or_default(),
                    value: data.resolve(plan, key, hint),
                }
            })
            .collect()
    };

    Some(RecapCard {
        api_id: plan.api_id.clone(),
        name: plan.name.clone(),
        description: plan.description.clone(),
        active: plan.api_id == selection.active_plan,
        most_popular: plan.most_popular,
        price: PriceCell::for_tier(&tier, selection.billing),
        tier,
        promo,
        specs,
    })
}

fn feature_row(data: &PricingData, hint: &Hint, selection: &Selection) -> FeatureRow {
    let footnote = extra_packet_for(&hint.key, &data.plans, &data.catalog)
        .map(|packet| packet_footnote(&hint.key, &packet));

    let cells = data
        .plans
        .iter()
        .map(|plan| FeatureCell {
            plan_id: plan.api_id.clone(),
            active: plan.api_id == selection.active_plan,
            value: data.resolve(plan, &hint.key, Some(hint)),
        })
        .collect();

    FeatureRow {
        key: hint.key.clone(),
        name: hint.name.clone(),
        description: hint.description.clone(),
        footnote,
        cells,
    }
}

/// Noun used for a limit in footnote text.
pub fn limit_label(hint_key: &str) -> &str {
    match hint_key {
        "itemTypes" => "models",
        "deploymentEnvironments" => "environments",
        "trafficBytes" => "bandwidth",
        "apiCalls" => "calls",
        other => other,
    }
}

/// "Extra users for €9 each" / "€10 every 100,000 extra calls".
pub fn packet_footnote(hint_key: &str, packet: &ExtraPacket) -> String {
    let label = limit_label(hint_key);
    let price = format_price(packet.price);
    if packet.amount_per_packet == 1.0 {
        format!("Extra {} for {} each", label, price)
    } else {
        format!(
            "{} every {} extra {}",
            price,
            format_number(hint_key, packet.amount_per_packet),
            label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_labels() {
        assert_eq!(limit_label("itemTypes"), "models");
        assert_eq!(limit_label("deploymentEnvironments"), "environments");
        assert_eq!(limit_label("trafficBytes"), "bandwidth");
        assert_eq!(limit_label("apiCalls"), "calls");
        assert_eq!(limit_label("users"), "users");
    }

    #[test]
    fn test_packet_footnote_single_unit() {
        let packet = ExtraPacket { price: 9.0, amount_per_packet: 1.0 };
        assert_eq!(packet_footnote("users", &packet), "Extra users for €9 each");
    }

    #[test]
    fn test_packet_footnote_bulk() {
        let packet = ExtraPacket { price: 10.0, amount_per_packet: 100000.0 };
        assert_eq!(packet_footnote("apiCalls", &packet), "€10 every 100,000 extra calls");

        let bytes = ExtraPacket { price: 20.0, amount_per_packet: 100.0 * 1024f64.powi(3) };
        assert_eq!(packet_footnote("trafficBytes", &bytes), "€20 every 100 GB extra bandwidth");
    }
}
