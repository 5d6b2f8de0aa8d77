use std::fmt;

use serde::Serialize;

/// How a single (plan, feature) cell of the pricing table renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum DisplayValue {
    Unlimited,
    CheckIcon,
    /// The plan explicitly lacks the feature; renders as an empty cell.
    Unavailable,
    /// No data anywhere for this cell.
    CustomLabel,
    FormattedNumber(String),
    RawString(String),
}

impl DisplayValue {
    pub fn is_check(&self) -> bool {
        matches!(self, DisplayValue::CheckIcon)
    }

    /// Plain-text rendering. The check icon has no text and renders as an
    /// empty string here; see [`DisplayValue::to_terminal`].
    pub fn label(&self) -> &str {
        match self {
            DisplayValue::Unlimited => "Unlimited",
            DisplayValue::CustomLabel => "Custom",
            DisplayValue::CheckIcon | DisplayValue::Unavailable => "",
            DisplayValue::FormattedNumber(s) | DisplayValue::RawString(s) => s,
        }
    }

    pub fn to_terminal(&self) -> String {
        match self {
            DisplayValue::CheckIcon => "✓".to_string(),
            other => other.label().to_string(),
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_terminal())
    }
}
