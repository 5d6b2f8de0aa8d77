/// Tests for resolving pricing-table cells and plan tiers
use std::collections::BTreeMap;

use dato_site::models::{
    AttributeValue, DisplayValue, ExtraPacket, Hint, HintOverride, Plan, PlanAttributes, PlanCatalog,
};
use dato_site::pricing::{extra_packet_for, resolve_value, Billing, PlanTier};

fn plan(api_id: &str) -> Plan {
    Plan {
        api_id: api_id.to_string(),
        name: format!("Plan {}", api_id),
        description: String::new(),
        position: 0,
        most_popular: false,
        promo_title: None,
        promo_description: None,
    }
}

fn attrs(id: &str, values: &[(&str, AttributeValue)]) -> PlanAttributes {
    PlanAttributes {
        id: id.to_string(),
        attributes: values
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    }
}

fn hint(key: &str, overrides: &[(&str, HintOverride)]) -> Hint {
    Hint {
        key: key.to_string(),
        name: key.to_string(),
        description: String::new(),
        plans: overrides
            .iter()
            .map(|(id, o)| (id.to_string(), o.clone()))
            .collect(),
    }
}

fn packets(entries: &[(&str, f64, f64)]) -> AttributeValue {
    let map: BTreeMap<String, Option<ExtraPacket>> = entries
        .iter()
        .map(|(k, price, amount)| {
            (
                k.to_string(),
                Some(ExtraPacket { price: *price, amount_per_packet: *amount }),
            )
        })
        .collect();
    AttributeValue::Packets(map)
}

#[test]
fn test_plan_attributes_win_over_hints() {
    let p = plan("28");
    let a = attrs("28", &[("users", AttributeValue::Number(10.0))]);
    let h = hint("users", &[("28", HintOverride::Text("Lots".into()))]);
    assert_eq!(
        resolve_value(&p, "users", Some(&h), Some(&a)),
        DisplayValue::FormattedNumber("10".into())
    );
}

#[test]
fn test_null_attribute_is_unlimited() {
    let p = plan("29");
    let a = attrs("29", &[("locales", AttributeValue::Unlimited)]);
    assert_eq!(resolve_value(&p, "locales", None, Some(&a)), DisplayValue::Unlimited);
}

#[test]
fn test_boolean_attributes() {
    let p = plan("29");
    let a = attrs(
        "29",
        &[("sso", AttributeValue::Flag(true)), ("audit", AttributeValue::Flag(false))],
    );
    assert_eq!(resolve_value(&p, "sso", None, Some(&a)), DisplayValue::CheckIcon);
    assert_eq!(resolve_value(&p, "audit", None, Some(&a)), DisplayValue::Unavailable);
}

#[test]
fn test_byte_and_count_formatting() {
    let p = plan("28");
    let a = attrs(
        "28",
        &[
            ("trafficBytes", AttributeValue::Number(100.0 * 1024f64.powi(3))),
            ("apiCalls", AttributeValue::Number(500000.0)),
            ("support", AttributeValue::Text("email".into())),
        ],
    );
    assert_eq!(
        resolve_value(&p, "trafficBytes", None, Some(&a)),
        DisplayValue::FormattedNumber("100 GB".into())
    );
    assert_eq!(
        resolve_value(&p, "apiCalls", None, Some(&a)),
        DisplayValue::FormattedNumber("500,000".into())
    );
    assert_eq!(
        resolve_value(&p, "support", None, Some(&a)),
        DisplayValue::RawString("email".into())
    );
}

#[test]
fn test_enterprise_falls_back_to_hint_overrides() {
    let p = plan("30");
    let sso = hint("sso", &[("30", HintOverride::Check)]);
    let support = hint("support", &[("30", HintOverride::Text("Dedicated".into()))]);
    let blank = hint("roles", &[("30", HintOverride::Text(String::new()))]);

    assert_eq!(resolve_value(&p, "sso", Some(&sso), None), DisplayValue::CheckIcon);
    assert_eq!(
        resolve_value(&p, "support", Some(&support), None),
        DisplayValue::RawString("Dedicated".into())
    );
    assert_eq!(
        resolve_value(&p, "roles", Some(&blank), None),
        DisplayValue::RawString(String::new())
    );
}

#[test]
fn test_missing_everywhere_is_custom() {
    let p = plan("30");
    let h = hint("users", &[("28", HintOverride::Text("10".into()))]);
    assert_eq!(resolve_value(&p, "users", Some(&h), None), DisplayValue::CustomLabel);
    assert_eq!(resolve_value(&p, "users", None, None), DisplayValue::CustomLabel);

    // Attributes present but silent on the key also fall back
    let a = attrs("30", &[("roles", AttributeValue::Number(3.0))]);
    assert_eq!(resolve_value(&p, "users", None, Some(&a)), DisplayValue::CustomLabel);
}

#[test]
fn test_resolve_is_idempotent() {
    let p = plan("28");
    let a = attrs("28", &[("apiCalls", AttributeValue::Number(123456.0))]);
    let first = resolve_value(&p, "apiCalls", None, Some(&a));
    let second = resolve_value(&p, "apiCalls", None, Some(&a));
    assert_eq!(first, second);
}

#[test]
fn test_extra_packet_found_on_third_plan() {
    let plans = vec![plan("10"), plan("28"), plan("29"), plan("30")];
    let catalog = PlanCatalog::new(vec![
        attrs("10", &[]),
        attrs("28", &[("extraPackets", packets(&[]))]),
        attrs("29", &[("extraPackets", packets(&[("users", 7.0, 1.0)]))]),
    ]);
    assert_eq!(
        extra_packet_for("users", &plans, &catalog),
        Some(ExtraPacket { price: 7.0, amount_per_packet: 1.0 })
    );
}

#[test]
fn test_extra_packet_follows_plan_order() {
    let plans = vec![plan("29"), plan("28")];
    let catalog = PlanCatalog::new(vec![
        attrs("28", &[("extraPackets", packets(&[("users", 9.0, 1.0)]))]),
        attrs("29", &[("extraPackets", packets(&[("users", 7.0, 1.0)]))]),
    ]);
    assert_eq!(
        extra_packet_for("users", &plans, &catalog).map(|p| p.price),
        Some(7.0)
    );
}

#[test]
fn test_extra_packet_uses_auto_packets() {
    let plans = vec![plan("29")];
    let catalog = PlanCatalog::new(vec![attrs(
        "29",
        &[("autoPackets", packets(&[("apiCalls", 10.0, 100000.0)]))],
    )]);
    assert_eq!(
        extra_packet_for("apiCalls", &plans, &catalog),
        Some(ExtraPacket { price: 10.0, amount_per_packet: 100000.0 })
    );
}

#[test]
fn test_extra_packet_absent() {
    let plans = vec![plan("10"), plan("30")];
    let catalog = PlanCatalog::new(vec![attrs("10", &[])]);
    assert_eq!(extra_packet_for("users", &plans, &catalog), None);
    assert_eq!(extra_packet_for("users", &[], &catalog), None);
}

#[test]
fn test_classify_tiers() {
    let free = attrs(
        "10",
        &[("monthlyPrice", AttributeValue::Number(0.0)), ("yearlyPrice", AttributeValue::Number(0.0))],
    );
    let paid = attrs(
        "28",
        &[("monthlyPrice", AttributeValue::Number(29.0)), ("yearlyPrice", AttributeValue::Number(279.0))],
    );

    assert_eq!(PlanTier::classify(Some(&free)), PlanTier::Free);
    assert_eq!(PlanTier::classify(None), PlanTier::Enterprise);
    assert_eq!(
        PlanTier::classify(Some(&paid)),
        PlanTier::Paid { monthly_price: Some(29.0), yearly_price: Some(279.0) }
    );
}

#[test]
fn test_monthly_amount_by_billing() {
    let tier = PlanTier::Paid { monthly_price: Some(29.0), yearly_price: Some(279.0) };
    assert_eq!(tier.monthly_amount(Billing::Monthly), Some(29.0));
    // 279 / 12 = 23.25, rounded down
    assert_eq!(tier.monthly_amount(Billing::Yearly), Some(23.0));

    assert_eq!(PlanTier::Free.monthly_amount(Billing::Monthly), None);
    assert_eq!(PlanTier::Enterprise.monthly_amount(Billing::Yearly), None);
}

#[test]
fn test_billing_parse() {
    assert_eq!("monthly".parse::<Billing>().unwrap(), Billing::Monthly);
    assert_eq!("Yearly".parse::<Billing>().unwrap(), Billing::Yearly);
    assert!("weekly".parse::<Billing>().is_err());
    assert_eq!(Billing::default(), Billing::Yearly);
}
