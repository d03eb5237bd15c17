//! # Records and Collections
//!
//! A [`Record`] is an opaque map of field name to [`FieldValue`]. The table
//! machinery never knows what a reward or a balance is; it only looks values
//! up by name and compares them.
//!
//! A [`Collection`] is a shared, immutable slice of records. Identity
//! (`Arc::ptr_eq`) is what the view models watch for changes.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use lib_utils::time::{from_unix_secs, parse_date_like};
use shared::dto::Amount;

/// Ordered records backing one table. Never mutated after construction.
pub type Collection = Arc<[Record]>;

/// Build a [`Collection`] from owned records.
pub fn collection(records: Vec<Record>) -> Collection {
    Arc::from(records)
}

/// One cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(DateTime<Utc>),
}

impl FieldValue {
    /// Numeric reading of the value, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            FieldValue::Date(_) => None,
        }
    }

    /// Timestamp reading of the value. Whole numbers count as unix seconds.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::Text(s) => parse_date_like(s).ok(),
            FieldValue::Number(n) if n.is_finite() && n.fract() == 0.0 => {
                from_unix_secs(*n as i64).ok()
            }
            FieldValue::Number(_) => None,
        }
    }

    /// Raw textual reading of the value.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Date(d) => Cow::Owned(d.to_rfc3339()),
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M")),
            other => f.write_str(&other.as_text()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Date(value)
    }
}

impl From<&Amount> for FieldValue {
    fn from(value: &Amount) -> Self {
        match value.value() {
            Some(n) => FieldValue::Number(n),
            None => FieldValue::Text(value.as_str().to_string()),
        }
    }
}

/// Map of field name to value for one table row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Insert an amount, skipping it when the feed sent an empty value.
    pub fn insert_amount(&mut self, name: &str, amount: &Amount) {
        if !amount.as_str().trim().is_empty() {
            self.insert(name, amount);
        }
    }

    /// Insert text, skipping it when empty.
    pub fn insert_text(&mut self, name: &str, text: &str) {
        if !text.is_empty() {
            self.insert(name, text);
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}
