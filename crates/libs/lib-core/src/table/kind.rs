//! # Table Kinds
//!
//! The dashboard has exactly four tables. Each kind carries a fixed schema:
//! which field names can be sorted on and which one orders the table before
//! the user picks a column.
//!
//! A [`Field`] can only be obtained from its kind's schema, so a header click
//! can never name a field the table does not have.

use std::str::FromStr;

use crate::error::{AppError, Result};

/// One of the dashboard's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKind {
    Rewards,
    Transactions,
    Balances,
    Pairs,
}

const REWARD_FIELDS: &[&str] = &["usd", "reward", "date"];
const TRANSACTION_FIELDS: &[&str] = &[
    "inputAmountNum",
    "outputAmountNum",
    "sender",
    "outputAddress",
    "expiration",
];
const BALANCE_FIELDS: &[&str] = &["asset", "address", "balance"];
const PAIR_FIELDS: &[&str] = &["pair", "fee", "price"];

impl TableKind {
    /// All kinds, in dashboard display order.
    pub const ALL: [TableKind; 4] = [
        TableKind::Rewards,
        TableKind::Transactions,
        TableKind::Balances,
        TableKind::Pairs,
    ];

    /// Stable key used in events and logs.
    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Rewards => "rewards",
            TableKind::Transactions => "transactions",
            TableKind::Balances => "balances",
            TableKind::Pairs => "pairs",
        }
    }

    /// Panel title.
    pub fn title(&self) -> &'static str {
        match self {
            TableKind::Rewards => "Rewards",
            TableKind::Transactions => "Transactions",
            TableKind::Balances => "Balances",
            TableKind::Pairs => "Pairs",
        }
    }

    /// Position in [`TableKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            TableKind::Rewards => 0,
            TableKind::Transactions => 1,
            TableKind::Balances => 2,
            TableKind::Pairs => 3,
        }
    }

    /// Field names this table can sort on.
    pub fn sort_fields(&self) -> &'static [&'static str] {
        match self {
            TableKind::Rewards => REWARD_FIELDS,
            TableKind::Transactions => TRANSACTION_FIELDS,
            TableKind::Balances => BALANCE_FIELDS,
            TableKind::Pairs => PAIR_FIELDS,
        }
    }

    /// Field used for ordering while no header is active.
    pub fn default_sort_key(&self) -> Field {
        let name = match self {
            TableKind::Rewards => "date",
            TableKind::Transactions => "expiration",
            TableKind::Balances => "balance",
            TableKind::Pairs => "price",
        };
        Field::new(*self, name)
    }

    /// Message shown when the table's collection is loaded and empty.
    pub fn default_empty_message(&self) -> &'static str {
        match self {
            TableKind::Rewards => "No rewards found.",
            TableKind::Transactions => "No recent transactions found.",
            TableKind::Balances => "No balances found.",
            TableKind::Pairs => "No pairs supported.",
        }
    }

    /// Look up a sortable field by name.
    pub fn field(&self, name: &str) -> Result<Field> {
        self.sort_fields()
            .iter()
            .find(|f| **f == name)
            .map(|f| Field::new(*self, *f))
            .ok_or_else(|| {
                AppError::InvalidInput(format!("{} has no sortable field `{}`", self.name(), name))
            })
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        TableKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidInput(format!("unknown table `{}`", s)))
    }
}

/// A sortable column field, checked against its table's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    kind: TableKind,
    name: &'static str,
}

impl Field {
    pub(crate) const fn new(kind: TableKind, name: &'static str) -> Self {
        Self { kind, name }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.kind.name(), self.name)
    }
}
