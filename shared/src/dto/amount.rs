//! # Numeric Amounts
//!
//! The provider service is loose about numbers: the same field may arrive as a
//! JSON number in one payload and as a numeric string in the next
//! (`"balance": "432423432"`). [`Amount`] keeps the raw text and parses on
//! demand, so a malformed value never fails decoding of the whole feed. A
//! `null` decodes as an empty amount, which reads as missing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric value as delivered by the feed, kept in its textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Amount(String);

impl Amount {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw text as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parsed value, `None` when the text is not a finite number.
    pub fn value(&self) -> Option<f64> {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawAmount>::deserialize(deserializer)? {
            Some(RawAmount::Number(n)) => Amount(n.to_string()),
            Some(RawAmount::Text(s)) => Amount(s),
            None => Amount::default(),
        })
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.value() {
            Some(v) => serializer.serialize_f64(v),
            None => serializer.serialize_str(&self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_from_number_and_string() {
        let a: Amount = serde_json::from_str("12.5").unwrap();
        let b: Amount = serde_json::from_str("\"12.5\"").unwrap();
        assert_eq!(a.value(), Some(12.5));
        assert_eq!(b.value(), Some(12.5));
    }

    #[test]
    fn test_amount_keeps_integer_text() {
        let a: Amount = serde_json::from_str("1704067200").unwrap();
        assert_eq!(a.as_str(), "1704067200");
    }

    #[test]
    fn test_malformed_amount_has_no_value() {
        let a: Amount = serde_json::from_str("\"n/a\"").unwrap();
        assert_eq!(a.value(), None);
        assert_eq!(a.to_string(), "n/a");
    }

    #[test]
    fn test_null_amount_is_empty() {
        let a: Amount = serde_json::from_str("null").unwrap();
        assert_eq!(a, Amount::default());
        assert_eq!(a.value(), None);
    }
}
