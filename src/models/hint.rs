use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::utils::camelize;

/// Override value that renders a check icon instead of text.
pub const CHECK_MARKER: &str = ":check:";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRef {
    pub api_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HintPlanValue {
    pub plan: PlanRef,
    #[serde(default)]
    pub value: Option<String>,
}

/// Pricing hint as it comes out of the CMS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintRecord {
    pub api_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plans: Vec<HintPlanValue>,
}

/// What a hint says about one plan when the plan payload is silent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum HintOverride {
    Check,
    Text(String),
}

impl HintOverride {
    /// A `null` value from the CMS becomes empty text, not "Custom".
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(CHECK_MARKER) => HintOverride::Check,
            Some(text) => HintOverride::Text(text.to_string()),
            None => HintOverride::Text(String::new()),
        }
    }
}

/// A feature row on the pricing table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hint {
    pub key: String,
    pub name: String,
    pub description: String,
    pub plans: BTreeMap<String, HintOverride>,
}

impl Hint {
    pub fn from_record(record: &HintRecord) -> Self {
        let plans = record
            .plans
            .iter()
            .map(|p| (p.plan.api_id.clone(), HintOverride::from_raw(p.value.as_deref())))
            .collect();
        Hint {
            key: camelize(&record.api_id),
            name: record.name.clone(),
            description: record.description.clone(),
            plans,
        }
    }

    pub fn override_for(&self, plan_id: &str) -> Option<&HintOverride> {
        self.plans.get(plan_id)
    }
}

/// Hints keyed by camel-cased api id, in CMS order.
///
/// A later record with the same key replaces the earlier one but keeps its
/// slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hints {
    entries: Vec<Hint>,
}

impl Hints {
    pub fn from_records(records: &[HintRecord]) -> Self {
        let mut entries: Vec<Hint> = Vec::with_capacity(records.len());
        for record in records {
            let hint = Hint::from_record(record);
            match entries.iter_mut().find(|h| h.key == hint.key) {
                Some(slot) => {
                    tracing::warn!(key = %hint.key, "Duplicate pricing hint; keeping the last one");
                    *slot = hint;
                }
                None => entries.push(hint),
            }
        }
        Hints { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Hint> {
        self.entries.iter().find(|h| h.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hint> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(api_id: &str, name: &str, plans: &[(&str, Option<&str>)]) -> HintRecord {
        HintRecord {
            api_id: api_id.into(),
            name: name.into(),
            description: String::new(),
            plans: plans
                .iter()
                .map(|(id, v)| HintPlanValue {
                    plan: PlanRef { api_id: (*id).into() },
                    value: v.map(str::to_string),
                })
                .collect(),
        }
    }

    #[test]
    fn test_keys_are_camelized() {
        let hints = Hints::from_records(&[record("item_types", "Models", &[])]);
        assert!(hints.get("itemTypes").is_some());
        assert!(hints.get("item_types").is_none());
    }

    #[test]
    fn test_overrides_are_parsed() {
        let hint = Hint::from_record(&record(
            "sso",
            "SSO",
            &[("1", Some(":check:")), ("2", Some("On request")), ("3", None)],
        ));
        assert_eq!(hint.override_for("1"), Some(&HintOverride::Check));
        assert_eq!(hint.override_for("2"), Some(&HintOverride::Text("On request".into())));
        assert_eq!(hint.override_for("3"), Some(&HintOverride::Text(String::new())));
        assert_eq!(hint.override_for("4"), None);
    }

    #[test]
    fn test_duplicate_keys_keep_first_position() {
        let hints = Hints::from_records(&[
            record("users", "Users (old)", &[]),
            record("roles", "Roles", &[]),
            record("users", "Users", &[]),
        ]);
        let names: Vec<&str> = hints.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Users", "Roles"]);
    }
}
