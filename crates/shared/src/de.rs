//! Lenient deserializers for documents written by older clients.
//!
//! Numeric fields never fail to decode: absent, `null`, non-numeric and
//! negative values all collapse to zero.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value.as_ref().map(to_number).unwrap_or_default())
}

pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// Unix seconds from a number or an RFC 3339 string such as
/// `2024-03-04T10:15:30.123Z`. Anything else is zero.
pub fn timestamp_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    let seconds = match value {
        Some(Value::String(s)) => match OffsetDateTime::parse(s.trim(), &Rfc3339) {
            Ok(datetime) => datetime.unix_timestamp().max(0) as u64,
            _ => to_number(&Value::String(s)) as u64,
        },
        Some(value) => to_number(&value) as u64,
        _ => 0,
    };

    Ok(seconds)
}

pub fn to_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or_default(),
        _ => 0.0,
    };

    if n.is_finite() && n > 0.0 { n } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "number_or_zero")]
        amount: f64,
        #[serde(default, deserialize_with = "string_or_empty")]
        name: String,
        #[serde(default, deserialize_with = "timestamp_or_zero")]
        created_at: u64,
    }

    fn sample(json: &str) -> Sample {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_and_null_are_zero() {
        assert_eq!(sample("{}").amount, 0.0);
        assert_eq!(sample(r#"{"amount": null}"#).amount, 0.0);
        assert_eq!(sample(r#"{"amount": null}"#).name, "");
    }

    #[test]
    fn malformed_numbers_are_zero() {
        assert_eq!(sample(r#"{"amount": "abc"}"#).amount, 0.0);
        assert_eq!(sample(r#"{"amount": -4}"#).amount, 0.0);
        assert_eq!(sample(r#"{"amount": [1]}"#).amount, 0.0);
    }

    #[test]
    fn numeric_strings_are_parsed() {
        assert_eq!(sample(r#"{"amount": " 12.5 "}"#).amount, 12.5);
        assert_eq!(sample(r#"{"amount": 150}"#).amount, 150.0);
    }

    #[test]
    fn timestamps_accept_numbers_and_iso_strings() {
        assert_eq!(sample(r#"{"created_at": 1709547330}"#).created_at, 1709547330);
        assert_eq!(
            sample(r#"{"created_at": "2024-03-04T10:15:30.123Z"}"#).created_at,
            1709547330
        );
        assert_eq!(sample(r#"{"created_at": "yesterday"}"#).created_at, 0);
        assert_eq!(sample(r#"{"created_at": {"seconds": 1}}"#).created_at, 0);
        assert_eq!(sample("{}").created_at, 0);
    }
}
