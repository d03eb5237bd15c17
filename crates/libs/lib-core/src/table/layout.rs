//! # Responsive Layout Resolver
//!
//! Maps the two viewport breakpoint flags to a [`ResponsiveClass`], and a
//! `(TableKind, ResponsiveClass)` pair to a fixed [`ColumnLayout`]. Narrower
//! classes show fewer columns. Layouts are static, so the same flags always
//! resolve to the same columns in the same order.

use crate::table::{Field, TableKind};

/// Viewport thresholds reported by the host on each layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Breakpoints {
    pub below_780: bool,
    pub below_1080: bool,
}

impl Breakpoints {
    pub fn new(below_780: bool, below_1080: bool) -> Self {
        Self { below_780, below_1080 }
    }

    /// Flags for a viewport width in pixels. The thresholds are inclusive.
    pub fn from_width(px: u32) -> Self {
        Self {
            below_780: px <= 780,
            below_1080: px <= 1080,
        }
    }
}

/// Width tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponsiveClass {
    Narrow,
    Medium,
    Wide,
}

impl From<Breakpoints> for ResponsiveClass {
    fn from(bp: Breakpoints) -> Self {
        if bp.below_780 {
            ResponsiveClass::Narrow
        } else if bp.below_1080 {
            ResponsiveClass::Medium
        } else {
            ResponsiveClass::Wide
        }
    }
}

/// One header cell. `field == None` is a display-only column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub field: Option<Field>,
}

impl Column {
    const fn sortable(label: &'static str, kind: TableKind, name: &'static str) -> Self {
        Self {
            label,
            field: Some(Field::new(kind, name)),
        }
    }

    const fn display(label: &'static str) -> Self {
        Self { label, field: None }
    }
}

/// Columns and grid template for one table at one width tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub class: ResponsiveClass,
    pub columns: &'static [Column],
    pub template: &'static str,
}

impl ColumnLayout {
    pub fn labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }

    /// Field names in column order; display-only columns read `"none"`.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .map(|c| c.field.map_or("none", |f| f.name()))
            .collect()
    }

    pub fn shows(&self, field: Field) -> bool {
        self.columns.iter().any(|c| c.field == Some(field))
    }
}

// region:    --- Rewards
const R: TableKind = TableKind::Rewards;

static REWARDS_WIDE: [Column; 4] = [
    Column::display("Provider"),
    Column::sortable("Liquidity", R, "usd"),
    Column::sortable("Reward", R, "reward"),
    Column::sortable("Date", R, "date"),
];

static REWARDS_NARROW: [Column; 3] = [
    Column::display("Provider"),
    Column::sortable("Reward", R, "reward"),
    Column::sortable("Date", R, "date"),
];
// endregion: --- Rewards

// region:    --- Transactions
const T: TableKind = TableKind::Transactions;

static TRANSACTIONS_WIDE: [Column; 6] = [
    Column::display("Pair"),
    Column::sortable("Sent", T, "inputAmountNum"),
    Column::sortable("Received", T, "outputAmountNum"),
    Column::sortable("From", T, "sender"),
    Column::sortable("To", T, "outputAddress"),
    Column::sortable("Expiration", T, "expiration"),
];

static TRANSACTIONS_MEDIUM: [Column; 4] = [
    Column::display("Pair"),
    Column::sortable("Sent", T, "inputAmountNum"),
    Column::sortable("Received", T, "outputAmountNum"),
    Column::sortable("Expiration", T, "expiration"),
];

static TRANSACTIONS_NARROW: [Column; 3] = [
    Column::display("Pair"),
    Column::sortable("Received", T, "outputAmountNum"),
    Column::sortable("Expiration", T, "expiration"),
];
// endregion: --- Transactions

// region:    --- Balances
const B: TableKind = TableKind::Balances;

static BALANCES_WIDE: [Column; 3] = [
    Column::sortable("Asset", B, "asset"),
    Column::sortable("Address", B, "address"),
    Column::sortable("Balance", B, "balance"),
];

static BALANCES_NARROW: [Column; 2] = [
    Column::sortable("Asset", B, "asset"),
    Column::sortable("Balance", B, "balance"),
];
// endregion: --- Balances

// region:    --- Pairs
const P: TableKind = TableKind::Pairs;

static PAIRS_WIDE: [Column; 3] = [
    Column::sortable("Pair", P, "pair"),
    Column::sortable("Fee", P, "fee"),
    Column::sortable("Price", P, "price"),
];

static PAIRS_NARROW: [Column; 2] = [
    Column::sortable("Pair", P, "pair"),
    Column::sortable("Price", P, "price"),
];
// endregion: --- Pairs

/// Layout for `kind` under the given breakpoints.
pub fn resolve(kind: TableKind, breakpoints: Breakpoints) -> ColumnLayout {
    use ResponsiveClass::*;

    let class = ResponsiveClass::from(breakpoints);
    let (columns, template): (&'static [Column], &'static str) = match (kind, class) {
        (TableKind::Rewards, Wide | Medium) => (&REWARDS_WIDE, "1.2fr 1fr 1fr 1fr"),
        (TableKind::Rewards, Narrow) => (&REWARDS_NARROW, "100px 1fr 1fr"),

        (TableKind::Transactions, Wide) => (&TRANSACTIONS_WIDE, "1fr 1fr 1fr 1.5fr 1.5fr 1fr"),
        (TableKind::Transactions, Medium) => (&TRANSACTIONS_MEDIUM, "1fr 1fr 1fr 1fr"),
        (TableKind::Transactions, Narrow) => (&TRANSACTIONS_NARROW, "1fr 1fr 1fr"),

        (TableKind::Balances, Wide) => (&BALANCES_WIDE, "0.6fr 2fr 1fr"),
        (TableKind::Balances, Medium) => (&BALANCES_WIDE, "0.6fr 1.5fr 1fr"),
        (TableKind::Balances, Narrow) => (&BALANCES_NARROW, "100px 1fr"),

        (TableKind::Pairs, Wide | Medium) => (&PAIRS_WIDE, "1fr 1fr 1fr"),
        (TableKind::Pairs, Narrow) => (&PAIRS_NARROW, "100px 1fr"),
    };

    ColumnLayout {
        class,
        columns,
        template,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_BREAKPOINTS: [Breakpoints; 4] = [
        Breakpoints { below_780: false, below_1080: false },
        Breakpoints { below_780: false, below_1080: true },
        Breakpoints { below_780: true, below_1080: true },
        Breakpoints { below_780: true, below_1080: false },
    ];

    #[test]
    fn test_class_from_flags() {
        assert_eq!(ResponsiveClass::from(Breakpoints::new(false, false)), ResponsiveClass::Wide);
        assert_eq!(ResponsiveClass::from(Breakpoints::new(false, true)), ResponsiveClass::Medium);
        assert_eq!(ResponsiveClass::from(Breakpoints::new(true, true)), ResponsiveClass::Narrow);
        // below780 wins even if the host reports an inconsistent pair
        assert_eq!(ResponsiveClass::from(Breakpoints::new(true, false)), ResponsiveClass::Narrow);
    }

    #[test]
    fn test_from_width() {
        assert_eq!(ResponsiveClass::from(Breakpoints::from_width(1440)), ResponsiveClass::Wide);
        assert_eq!(ResponsiveClass::from(Breakpoints::from_width(1000)), ResponsiveClass::Medium);
        assert_eq!(ResponsiveClass::from(Breakpoints::from_width(375)), ResponsiveClass::Narrow);
        assert_eq!(Breakpoints::from_width(1080), Breakpoints::new(false, true));
        assert_eq!(Breakpoints::from_width(780), Breakpoints::new(true, true));
    }

    #[test]
    fn test_narrow_transactions_columns() {
        let layout = resolve(TableKind::Transactions, Breakpoints::new(true, false));
        assert_eq!(layout.labels(), vec!["Pair", "Received", "Expiration"]);
        assert_eq!(layout.field_names(), vec!["none", "outputAmountNum", "expiration"]);
    }

    #[test]
    fn test_medium_transactions_drop_addresses() {
        let layout = resolve(TableKind::Transactions, Breakpoints::new(false, true));
        assert_eq!(layout.labels(), vec!["Pair", "Sent", "Received", "Expiration"]);
    }

    #[test]
    fn test_narrow_rewards_drop_liquidity() {
        let wide = resolve(TableKind::Rewards, Breakpoints::default());
        let narrow = resolve(TableKind::Rewards, Breakpoints::new(true, true));
        let usd = TableKind::Rewards.field("usd").unwrap();

        assert!(wide.shows(usd));
        assert!(!narrow.shows(usd));
        assert_eq!(narrow.template, "100px 1fr 1fr");
    }

    #[test]
    fn test_resolve_is_stable() {
        for kind in TableKind::ALL {
            for bp in ALL_BREAKPOINTS {
                assert_eq!(resolve(kind, bp), resolve(kind, bp));
            }
        }
    }

    #[test]
    fn test_every_layout_field_is_in_schema() {
        for kind in TableKind::ALL {
            for bp in ALL_BREAKPOINTS {
                let layout = resolve(kind, bp);
                for field in layout.columns.iter().filter_map(|c| c.field) {
                    assert_eq!(field.kind(), kind);
                    assert_eq!(kind.field(field.name()).unwrap(), field);
                }
            }
        }
    }

    #[test]
    fn test_narrower_never_adds_columns() {
        for kind in TableKind::ALL {
            let wide = resolve(kind, Breakpoints::new(false, false)).columns.len();
            let medium = resolve(kind, Breakpoints::new(false, true)).columns.len();
            let narrow = resolve(kind, Breakpoints::new(true, true)).columns.len();
            assert!(wide >= medium && medium >= narrow, "{}", kind);
        }
    }
}
