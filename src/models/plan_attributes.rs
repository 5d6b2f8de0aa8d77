use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Price of one add-on packet of quota.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPacket {
    pub price: f64,
    pub amount_per_packet: f64,
}

/// A single value in a plan's attribute map.
///
/// Variant order matters: serde tries them top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// `null` in the payload, meaning no limit applies.
    Unlimited,
    Flag(bool),
    /// Integers above 2^53 lose precision here.
    Number(f64),
    Text(String),
    /// `extraPackets` / `autoPackets`: feature key to packet pricing. An
    /// entry that is not a full packet (`false`, `0`, missing fields) is
    /// `None` and leaves its siblings usable.
    Packets(#[serde(deserialize_with = "packets_per_entry")] BTreeMap<String, Option<ExtraPacket>>),
    Other(serde_json::Value),
}

impl AttributeValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Unlimited => Ok(()),
            AttributeValue::Flag(b) => write!(f, "{}", b),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => f.write_str(s),
            AttributeValue::Packets(_) | AttributeValue::Other(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

/// Numeric limits and prices for one plan, decoded from the plans payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanAttributes {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl PlanAttributes {
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn monthly_price(&self) -> Option<f64> {
        self.get("monthlyPrice").and_then(AttributeValue::as_number)
    }

    pub fn yearly_price(&self) -> Option<f64> {
        self.get("yearlyPrice").and_then(AttributeValue::as_number)
    }

    /// Packet pricing for `key`, preferring `extraPackets` over `autoPackets`.
    pub fn packet(&self, key: &str) -> Option<ExtraPacket> {
        self.packet_in("extraPackets", key)
            .or_else(|| self.packet_in("autoPackets", key))
    }

    fn packet_in(&self, group: &str, key: &str) -> Option<ExtraPacket> {
        match self.get(group) {
            Some(AttributeValue::Packets(map)) => map.get(key).copied().flatten(),
            _ => None,
        }
    }
}

/// All decoded plan attribute records, in payload order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanCatalog {
    records: Vec<PlanAttributes>,
}

impl PlanCatalog {
    pub fn new(records: Vec<PlanAttributes>) -> Self {
        PlanCatalog { records }
    }

    pub fn find(&self, plan_id: &str) -> Option<&PlanAttributes> {
        self.records.iter().find(|r| r.id == plan_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanAttributes> {
        self.records.iter()
    }
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

fn packets_per_entry<'de, D>(deserializer: D) -> Result<BTreeMap<String, Option<ExtraPacket>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| (key, serde_json::from_value(value).ok()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attribute_shapes() {
        let record: PlanAttributes = serde_json::from_value(json!({
            "id": 28,
            "attributes": {
                "users": null,
                "sso": true,
                "itemTypes": 30,
                "support": "email",
                "extraPackets": { "users": { "price": 9, "amountPerPacket": 1 }, "locales": null },
                "tags": ["a"]
            }
        }))
        .unwrap();

        assert_eq!(record.id, "28");
        assert_eq!(record.get("users"), Some(&AttributeValue::Unlimited));
        assert_eq!(record.get("sso"), Some(&AttributeValue::Flag(true)));
        assert_eq!(record.get("itemTypes"), Some(&AttributeValue::Number(30.0)));
        assert_eq!(record.get("support"), Some(&AttributeValue::Text("email".into())));
        assert!(matches!(record.get("tags"), Some(AttributeValue::Other(_))));
        assert_eq!(
            record.packet("users"),
            Some(ExtraPacket { price: 9.0, amount_per_packet: 1.0 })
        );
        assert_eq!(record.packet("locales"), None);
    }

    #[test]
    fn test_packet_falls_back_to_auto_packets() {
        let record: PlanAttributes = serde_json::from_value(json!({
            "id": "1",
            "attributes": {
                "extraPackets": {},
                "autoPackets": { "apiCalls": { "price": 10, "amountPerPacket": 100000 } }
            }
        }))
        .unwrap();
        assert_eq!(
            record.packet("apiCalls"),
            Some(ExtraPacket { price: 10.0, amount_per_packet: 100000.0 })
        );
    }

    #[test]
    fn test_malformed_packet_entries_keep_their_siblings() {
        let record: PlanAttributes = serde_json::from_value(json!({
            "id": "28",
            "attributes": {
                "extraPackets": {
                    "users": { "price": 9, "amountPerPacket": 1 },
                    "locales": false,
                    "roles": 0,
                    "itemTypes": { "price": 5 }
                }
            }
        }))
        .unwrap();

        assert_eq!(
            record.packet("users"),
            Some(ExtraPacket { price: 9.0, amount_per_packet: 1.0 })
        );
        assert_eq!(record.packet("locales"), None);
        assert_eq!(record.packet("roles"), None);
        assert_eq!(record.packet("itemTypes"), None);
    }

    #[test]
    fn test_missing_attributes_default_to_empty() {
        let record: PlanAttributes = serde_json::from_value(json!({ "id": "7" })).unwrap();
        assert!(record.attributes.is_empty());
        assert_eq!(record.monthly_price(), None);
    }
}
