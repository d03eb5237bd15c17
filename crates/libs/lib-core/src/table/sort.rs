//! # Sort State
//!
//! Active sort field and direction for one table, plus the comparison used to
//! order its records.
//!
//! Header clicks follow one rule: clicking the active column flips the
//! direction, clicking any other column selects it ascending.
//!
//! Comparison picks a reading per field:
//! - fields listed in the configured date set compare as timestamps
//! - otherwise values compare as numbers when they all parse as numbers
//! - otherwise values compare as raw text
//!
//! A record without the field, or with a date field that does not parse,
//! sorts as the smallest value: first when ascending, last when descending.
//! Ties keep their input order.

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::config::DateFields;
use crate::model::{FieldValue, Record};
use crate::table::{Field, TableKind};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header arrow.
    pub fn glyph(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Current sort for one table.
///
/// `field == None` means no header is highlighted; the table is still ordered
/// by its kind's default key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: Option<Field>,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: None,
            direction: SortDirection::Desc,
        }
    }
}

/// What a header click changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortChange {
    /// A different column became active (direction forced to ascending).
    NewField,
    /// The active column was clicked again (direction flipped).
    Toggled,
}

/// Which header shows an arrow, and which arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortIndicator {
    pub field: Field,
    pub direction: SortDirection,
}

impl SortIndicator {
    pub fn glyph(&self) -> &'static str {
        self.direction.glyph()
    }
}

/// Output of one sort pass over a collection.
#[derive(Debug)]
pub struct SortPass<'a> {
    pub rows: Vec<&'a Record>,
    /// Records that had no usable value for the sort key.
    pub missing: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reading {
    Date,
    Number,
    Text,
}

#[derive(Debug)]
enum SortKey<'a> {
    Missing,
    Date(DateTime<Utc>),
    Number(f64),
    Text(Cow<'a, str>),
}

impl SortKey<'_> {
    fn cmp_asc(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
            (SortKey::Missing, _) => Ordering::Less,
            (_, SortKey::Missing) => Ordering::Greater,
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            // One reading is chosen per pass, so mixed variants never meet.
            _ => Ordering::Equal,
        }
    }
}

/// Sort field and direction for one table.
#[derive(Debug, Clone)]
pub struct SortState {
    kind: TableKind,
    spec: SortSpec,
    date_fields: DateFields,
}

impl SortState {
    pub fn new(kind: TableKind, date_fields: DateFields) -> Self {
        Self {
            kind,
            spec: SortSpec::default(),
            date_fields,
        }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn spec(&self) -> SortSpec {
        self.spec
    }

    /// Field actually used for ordering.
    pub fn active_key(&self) -> Field {
        self.spec.field.unwrap_or_else(|| self.kind.default_sort_key())
    }

    /// Apply a header click.
    pub fn set_sort_field(&mut self, field: Field) -> SortChange {
        if self.spec.field == Some(field) {
            self.spec.direction = self.spec.direction.toggled();
            SortChange::Toggled
        } else {
            self.spec.field = Some(field);
            self.spec.direction = SortDirection::Asc;
            SortChange::NewField
        }
    }

    /// Back to no active header, descending by the default key.
    pub fn reset(&mut self) {
        self.spec = SortSpec::default();
    }

    pub fn indicator(&self) -> Option<SortIndicator> {
        self.spec.field.map(|field| SortIndicator {
            field,
            direction: self.spec.direction,
        })
    }

    /// Compare two records by the active key and direction.
    ///
    /// The reading (date, number, text) is chosen from these two values alone.
    /// [`SortState::sort`] chooses it once for the whole collection instead,
    /// which gives the same result whenever a column is consistently numeric
    /// or consistently textual.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let name = self.active_key().name();
        let (va, vb) = (a.get(name), b.get(name));
        let reading = self.reading_for(name, [va, vb].into_iter().flatten());

        let ka = key_for(reading, va);
        let kb = key_for(reading, vb);
        self.spec.direction.apply(ka.cmp_asc(&kb))
    }

    /// Order the whole collection without touching it.
    pub fn sort<'a>(&self, records: &'a [Record]) -> SortPass<'a> {
        let name = self.active_key().name();
        let reading = self.reading_for(name, records.iter().filter_map(|r| r.get(name)));

        let mut keyed: Vec<(SortKey<'a>, &'a Record)> = records
            .iter()
            .map(|r| (key_for(reading, r.get(name)), r))
            .collect();

        let missing = keyed
            .iter()
            .filter(|(k, _)| matches!(k, SortKey::Missing))
            .count();
        if missing > 0 {
            tracing::trace!(
                table = %self.kind,
                field = name,
                missing,
                "records missing sort field, ordering them as minimum"
            );
        }

        // `sort_by` is stable, and reversing an ordering keeps `Equal` equal.
        let direction = self.spec.direction;
        keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp_asc(b)));

        SortPass {
            rows: keyed.into_iter().map(|(_, r)| r).collect(),
            missing,
        }
    }

    fn reading_for<'v>(
        &self,
        name: &str,
        mut present: impl Iterator<Item = &'v FieldValue>,
    ) -> Reading {
        if self.date_fields.contains(name) {
            Reading::Date
        } else if present.all(|v| v.as_number().is_some()) {
            Reading::Number
        } else {
            Reading::Text
        }
    }
}

fn key_for(reading: Reading, value: Option<&FieldValue>) -> SortKey<'_> {
    let Some(value) = value else {
        return SortKey::Missing;
    };

    match reading {
        Reading::Date => value.as_date().map_or(SortKey::Missing, SortKey::Date),
        Reading::Number => value.as_number().map_or(SortKey::Missing, SortKey::Number),
        Reading::Text => SortKey::Text(value.as_text()),
    }
}
