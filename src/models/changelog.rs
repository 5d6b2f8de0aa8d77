use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hex: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangelogCategory {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: Color,
}

/// One changelog article. Content is HTML rendered by the CMS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogEntry {
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publication_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<ChangelogCategory>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

impl ChangelogEntry {
    /// Human-readable publication date ("March 12, 2018").
    ///
    /// Falls back to the raw value when the CMS sends something that is not an
    /// ISO date.
    pub fn display_date(&self) -> String {
        let raw = self.publication_date.trim();
        let date_part = raw.split('T').next().unwrap_or(raw);
        match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
            Ok(date) => date.format("%B %-d, %Y").to_string(),
            Err(_) => raw.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str) -> ChangelogEntry {
        ChangelogEntry {
            slug: "x".into(),
            title: "X".into(),
            publication_date: date.into(),
            categories: vec![],
            content: String::new(),
        }
    }

    #[test]
    fn test_display_date_iso() {
        assert_eq!(entry("2018-03-02").display_date(), "March 2, 2018");
    }

    #[test]
    fn test_display_date_with_time() {
        assert_eq!(entry("2019-11-29T10:00:00Z").display_date(), "November 29, 2019");
    }

    #[test]
    fn test_display_date_unparsable_is_passed_through() {
        assert_eq!(entry("last week").display_date(), "last week");
    }
}
