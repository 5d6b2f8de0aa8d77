use crate::models::AttributeValue;

const BYTE_UNITS: [&str; 6] = ["bytes", "kB", "MB", "GB", "TB", "PB"];

/// Format a plan attribute for display, keyed by the attribute name.
///
/// * `...Bytes` keys are scaled to the largest fitting byte unit.
/// * integers get comma thousands separators.
/// * everything else is rendered unchanged.
pub fn format_value(key: &str, value: &AttributeValue) -> String {
    if key.ends_with("Bytes") {
        return match value {
            AttributeValue::Number(n) => pretty_bytes(*n),
            AttributeValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(pretty_bytes)
                .unwrap_or_else(|_| "-".to_string()),
            _ => "-".to_string(),
        };
    }

    match value {
        AttributeValue::Number(n) if is_integer(*n) => number_with_commas(*n),
        other => other.to_string(),
    }
}

/// Same as [`format_value`] for a bare number.
pub fn format_number(key: &str, value: f64) -> String {
    format_value(key, &AttributeValue::Number(value))
}

/// Scale a byte count to `bytes`/`kB`/`MB`/`GB`/`TB`/`PB` with no decimals.
pub fn pretty_bytes(num: f64) -> String {
    if !num.is_finite() || num < 0.0 {
        return "-".to_string();
    }
    if num == 0.0 {
        return "0 bytes".to_string();
    }

    let order = (num.ln() / 1024f64.ln()).floor();
    let order = order.clamp(0.0, (BYTE_UNITS.len() - 1) as f64) as usize;
    let scaled = (num / 1024f64.powi(order as i32)).round();

    format!("{} {}", scaled, BYTE_UNITS[order])
}

/// `12345` -> `"12,345"`. The sign is left alone.
pub fn number_with_commas(n: f64) -> String {
    let raw = n.to_string();
    let (sign, rest) = match raw.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Euro amounts as shown on the pricing page: `9` not `9.0`.
pub fn format_price(value: f64) -> String {
    format!("€{}", value)
}

fn is_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_bytes_units() {
        assert_eq!(pretty_bytes(0.0), "0 bytes");
        assert_eq!(pretty_bytes(512.0), "512 bytes");
        assert_eq!(pretty_bytes(1536.0), "2 kB");
        assert_eq!(pretty_bytes(10.0 * 1024.0 * 1024.0), "10 MB");
        assert_eq!(pretty_bytes(5.0 * 1024f64.powi(3)), "5 GB");
    }

    #[test]
    fn test_pretty_bytes_clamps_to_petabytes() {
        assert_eq!(pretty_bytes(1024f64.powi(7)), "1048576 PB");
    }

    #[test]
    fn test_pretty_bytes_invalid() {
        assert_eq!(pretty_bytes(f64::NAN), "-");
        assert_eq!(pretty_bytes(f64::INFINITY), "-");
        assert_eq!(pretty_bytes(-12.0), "-");
    }

    #[test]
    fn test_pretty_bytes_fraction_below_one() {
        assert_eq!(pretty_bytes(0.4), "0 bytes");
    }

    #[test]
    fn test_number_with_commas() {
        assert_eq!(number_with_commas(0.0), "0");
        assert_eq!(number_with_commas(999.0), "999");
        assert_eq!(number_with_commas(1000.0), "1,000");
        assert_eq!(number_with_commas(1234567.0), "1,234,567");
        assert_eq!(number_with_commas(-1234.0), "-1,234");
        assert_eq!(number_with_commas(-123.0), "-123");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(9.0), "€9");
        assert_eq!(format_price(12.5), "€12.5");
    }
}
