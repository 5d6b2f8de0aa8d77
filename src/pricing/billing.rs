use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Billing interval selected on the pricing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Billing {
    Monthly,
    #[default]
    Yearly,
}

impl FromStr for Billing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" => Ok(Billing::Monthly),
            "yearly" | "annual" | "year" => Ok(Billing::Yearly),
            other => Err(format!("unknown billing period '{}' (expected monthly or yearly)", other)),
        }
    }
}

impl fmt::Display for Billing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Billing::Monthly => f.write_str("monthly"),
            Billing::Yearly => f.write_str("yearly"),
        }
    }
}
