//! # Table View Model
//!
//! Owns the sort, pagination and layout state of one table and turns a
//! [`Collection`] into the rows to draw.
//!
//! Every call to [`TableViewModel::view`] runs the same pipeline over the
//! current collection: sort the whole collection, size the pages from the
//! sorted length, clamp the page, slice the window. Nothing is cached between
//! calls.

use std::sync::Arc;

use crate::config::DateFields;
use crate::error::{AppError, Degradation, Result};
use crate::model::{Collection, Record};
use crate::table::layout::{self, Breakpoints, Column, ColumnLayout, ResponsiveClass};
use crate::table::pagination::Pagination;
use crate::table::sort::{SortChange, SortIndicator, SortSpec, SortState};
use crate::table::{Field, TableKind};

/// Render state of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Loading,
    Empty,
    Populated,
}

/// State for one table instance.
#[derive(Debug, Clone)]
pub struct TableViewModel {
    kind: TableKind,
    sort: SortState,
    pagination: Pagination,
    breakpoints: Breakpoints,
    layout: ColumnLayout,
    source: Option<Collection>,
    empty_message: String,
}

impl TableViewModel {
    pub fn new(
        kind: TableKind,
        page_size: usize,
        date_fields: DateFields,
        empty_message: impl Into<String>,
    ) -> Self {
        let breakpoints = Breakpoints::default();
        Self {
            kind,
            sort: SortState::new(kind, date_fields),
            pagination: Pagination::new(page_size),
            breakpoints,
            layout: layout::resolve(kind, breakpoints),
            source: None,
            empty_message: empty_message.into(),
        }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn source(&self) -> Option<&Collection> {
        self.source.as_ref()
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort.spec()
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn layout(&self) -> ColumnLayout {
        self.layout
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// Swap in a new source. Returns true when identity changed, in which
    /// case sort and page go back to their defaults.
    pub fn set_collection(&mut self, source: Option<Collection>) -> bool {
        let same = match (&self.source, &source) {
            (Some(old), Some(new)) => Arc::ptr_eq(old, new),
            (None, None) => true,
            _ => false,
        };
        if same {
            return false;
        }

        self.source = source;
        self.reset();
        true
    }

    /// Default sort, first page.
    pub fn reset(&mut self) {
        self.sort.reset();
        self.pagination.reset();
        self.pagination.sync(self.len());
    }

    /// Re-resolve the layout. Sort and page are kept.
    pub fn set_breakpoints(&mut self, breakpoints: Breakpoints) {
        self.breakpoints = breakpoints;
        self.layout = layout::resolve(self.kind, breakpoints);
    }

    /// Header click. The page goes back to 1 only when a different column
    /// becomes active.
    pub fn on_header_click(&mut self, field: Field) -> Result<SortChange> {
        if field.kind() != self.kind {
            tracing::warn!(
                table = %self.kind,
                field = %field,
                "header click rejected: field belongs to another table"
            );
            return Err(AppError::InvalidInput(format!(
                "{} cannot be sorted by {}",
                self.kind, field
            )));
        }

        let change = self.sort.set_sort_field(field);
        if change == SortChange::NewField {
            self.pagination.reset();
        }
        Ok(change)
    }

    /// Jump to a page. Returns the page actually shown after clamping.
    pub fn on_page_change(&mut self, page: usize) -> usize {
        self.pagination.sync(self.len());
        self.pagination.set_page(page)
    }

    pub fn next_page(&mut self) -> bool {
        self.pagination.sync(self.len());
        self.pagination.next_page()
    }

    pub fn prev_page(&mut self) -> bool {
        self.pagination.sync(self.len());
        self.pagination.prev_page()
    }

    pub fn status(&self) -> TableStatus {
        match &self.source {
            None => TableStatus::Loading,
            Some(c) if c.is_empty() => TableStatus::Empty,
            Some(_) => TableStatus::Populated,
        }
    }

    /// Build the render snapshot for this table.
    pub fn view(&self) -> TableView<'_> {
        let status = self.status();
        let records: &[Record] = self.source.as_deref().unwrap_or(&[]);

        let pass = self.sort.sort(records);
        let mut pages = self.pagination.clone();
        pages.sync(pass.rows.len());
        let rows = pages.visible_slice(&pass.rows).to_vec();

        TableView {
            kind: self.kind,
            status,
            class: self.layout.class,
            columns: self.layout.columns,
            template: self.layout.template,
            sort_spec: self.sort.spec(),
            sort_indicator: self.sort.indicator(),
            sort_key: self.sort.active_key(),
            rows,
            page: pages.page(),
            max_page: pages.max_page(),
            can_prev: pages.can_prev(),
            can_next: pages.can_next(),
            loading: status == TableStatus::Loading,
            empty_message: (status == TableStatus::Empty).then_some(self.empty_message.as_str()),
            total_rows: records.len(),
            missing: pass.missing,
        }
    }

    fn len(&self) -> usize {
        self.source.as_ref().map_or(0, |c| c.len())
    }
}

/// What the presentation layer draws for one table.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    pub kind: TableKind,
    pub status: TableStatus,
    pub class: ResponsiveClass,
    pub columns: &'static [Column],
    pub template: &'static str,
    pub sort_spec: SortSpec,
    pub sort_indicator: Option<SortIndicator>,
    pub sort_key: Field,
    pub rows: Vec<&'a Record>,
    pub page: usize,
    pub max_page: usize,
    pub can_prev: bool,
    pub can_next: bool,
    pub loading: bool,
    pub empty_message: Option<&'a str>,
    pub total_rows: usize,
    pub missing: usize,
}

impl TableView<'_> {
    /// Why the table renders degraded, if it does.
    pub fn degradation(&self) -> Option<Degradation> {
        match self.status {
            TableStatus::Loading => Some(Degradation::DataUnavailable),
            TableStatus::Empty => Some(Degradation::EmptyCollection),
            TableStatus::Populated if self.missing > 0 => Some(Degradation::MissingFieldValue {
                field: self.sort_key.name().to_string(),
                count: self.missing,
            }),
            TableStatus::Populated => None,
        }
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.max_page)
    }

    /// Arrow for a header cell, if that column is the active one.
    pub fn glyph_for(&self, column: &Column) -> Option<&'static str> {
        match (self.sort_indicator, column.field) {
            (Some(ind), Some(field)) if ind.field == field => Some(ind.glyph()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_field_list;
    use crate::model::collection;
    use crate::table::sort::SortDirection;

    fn model(kind: TableKind, page_size: usize) -> TableViewModel {
        TableViewModel::new(
            kind,
            page_size,
            parse_field_list("date,expiration"),
            kind.default_empty_message(),
        )
    }

    fn rewards(n: usize) -> Collection {
        collection(
            (0..n)
                .map(|i| {
                    Record::new()
                        .with("name", "alpha")
                        .with("usd", i as f64)
                        .with("reward", (n - i) as f64)
                        .with("date", format!("2024-01-{:02}", (i % 28) + 1))
                })
                .collect(),
        )
    }

    fn usd_values(view: &TableView<'_>) -> Vec<f64> {
        view.rows
            .iter()
            .filter_map(|r| r.get("usd").and_then(|v| v.as_number()))
            .collect()
    }

    #[test]
    fn test_state_transitions() {
        let mut vm = model(TableKind::Rewards, 10);

        let view = vm.view();
        assert_eq!(view.status, TableStatus::Loading);
        assert!(view.loading);
        assert!(view.rows.is_empty());
        assert_eq!(view.degradation(), Some(Degradation::DataUnavailable));

        vm.set_collection(Some(collection(Vec::new())));
        let view = vm.view();
        assert_eq!(view.status, TableStatus::Empty);
        assert_eq!(view.empty_message, Some("No rewards found."));
        assert_eq!(view.degradation(), Some(Degradation::EmptyCollection));

        vm.set_collection(Some(rewards(3)));
        let view = vm.view();
        assert_eq!(view.status, TableStatus::Populated);
        assert_eq!(view.rows.len(), 3);
        assert!(view.empty_message.is_none());
        assert!(view.degradation().is_none());
    }

    #[test]
    fn test_twenty_five_rows_three_pages() {
        let mut vm = model(TableKind::Rewards, 10);
        vm.set_collection(Some(rewards(25)));

        assert_eq!(vm.on_page_change(3), 3);
        let view = vm.view();
        assert_eq!(view.max_page, 3);
        assert_eq!(view.rows.len(), 5);
        assert!(!view.can_next);
        assert_eq!(view.page_label(), "Page 3 of 3");
    }

    #[test]
    fn test_sort_covers_whole_collection_before_slicing() {
        let usd = TableKind::Rewards.field("usd").unwrap();
        let mut vm = model(TableKind::Rewards, 10);
        vm.set_collection(Some(rewards(25)));

        vm.on_header_click(usd).unwrap();
        vm.on_header_click(usd).unwrap();
        assert_eq!(vm.sort_spec().direction, SortDirection::Desc);

        let view = vm.view();
        assert_eq!(usd_values(&view)[0], 24.0);
    }

    #[test]
    fn test_page_resets_only_on_new_field() {
        let usd = TableKind::Rewards.field("usd").unwrap();
        let reward = TableKind::Rewards.field("reward").unwrap();
        let mut vm = model(TableKind::Rewards, 10);
        vm.set_collection(Some(rewards(25)));

        vm.on_header_click(usd).unwrap();
        vm.on_page_change(2);

        assert_eq!(vm.on_header_click(usd).unwrap(), SortChange::Toggled);
        assert_eq!(vm.page(), 2);

        assert_eq!(vm.on_header_click(reward).unwrap(), SortChange::NewField);
        assert_eq!(vm.page(), 1);
    }

    #[test]
    fn test_header_click_from_other_kind_rejected() {
        let mut vm = model(TableKind::Rewards, 10);
        vm.set_collection(Some(rewards(5)));
        let before = vm.sort_spec();

        let err = vm
            .on_header_click(TableKind::Pairs.field("price").unwrap())
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(vm.sort_spec(), before);
    }

    #[test]
    fn test_new_collection_identity_resets_state() {
        let usd = TableKind::Rewards.field("usd").unwrap();
        let data = rewards(25);
        let mut vm = model(TableKind::Rewards, 10);
        vm.set_collection(Some(Arc::clone(&data)));
        vm.on_header_click(usd).unwrap();
        vm.on_page_change(3);

        assert!(!vm.set_collection(Some(Arc::clone(&data))));
        assert_eq!(vm.page(), 3);

        assert!(vm.set_collection(Some(rewards(25))));
        assert_eq!(vm.page(), 1);
        assert_eq!(vm.sort_spec(), SortSpec::default());
    }

    #[test]
    fn test_breakpoints_keep_sort_and_page() {
        let usd = TableKind::Rewards.field("usd").unwrap();
        let mut vm = model(TableKind::Rewards, 10);
        vm.set_collection(Some(rewards(25)));
        vm.on_header_click(usd).unwrap();
        vm.on_page_change(2);

        vm.set_breakpoints(Breakpoints::new(true, true));
        let view = vm.view();
        assert_eq!(view.class, ResponsiveClass::Narrow);
        assert_eq!(view.columns.len(), 3);
        assert_eq!(view.page, 2);
        assert_eq!(view.sort_indicator.map(|i| i.field), Some(usd));
    }

    #[test]
    fn test_glyph_only_on_active_column() {
        let reward = TableKind::Rewards.field("reward").unwrap();
        let mut vm = model(TableKind::Rewards, 10);
        vm.set_collection(Some(rewards(2)));

        let view = vm.view();
        assert!(view.columns.iter().all(|c| view.glyph_for(c).is_none()));

        vm.on_header_click(reward).unwrap();
        let view = vm.view();
        let glyphs: Vec<_> = view.columns.iter().filter_map(|c| view.glyph_for(c)).collect();
        assert_eq!(glyphs, vec!["↑"]);
    }

    #[test]
    fn test_missing_sort_field_reported() {
        let data = collection(vec![
            Record::new().with("usd", 1.0).with("date", "2024-01-01"),
            Record::new().with("usd", 2.0),
        ]);
        let mut vm = model(TableKind::Rewards, 10);
        vm.set_collection(Some(data));

        let view = vm.view();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(
            view.degradation(),
            Some(Degradation::MissingFieldValue { field: "date".to_string(), count: 1 })
        );
    }

    #[test]
    fn test_sparse_feed_row_sorts_as_minimum() {
        let feed: Vec<shared::dto::RewardDto> = serde_json::from_value(serde_json::json!([
            { "name": "alpha", "usd": 7, "reward": 1, "date": "2024-01-01" },
            { "name": "alpha", "reward": 2, "date": "2024-01-02" },
            { "name": "alpha", "usd": null, "reward": 3, "date": "2024-01-03" },
            { "name": "alpha", "usd": "3", "reward": 4, "date": "2024-01-04" }
        ]))
        .unwrap();
        let records = crate::model::derive::reward_records(&feed, "alpha");

        let mut vm = model(TableKind::Rewards, 10);
        vm.set_collection(Some(collection(records)));
        vm.on_header_click(TableKind::Rewards.field("usd").unwrap()).unwrap();

        let view = vm.view();
        let rewards: Vec<f64> = view
            .rows
            .iter()
            .filter_map(|r| r.get("reward").and_then(|v| v.as_number()))
            .collect();
        assert_eq!(rewards, vec![2.0, 3.0, 4.0, 1.0]);
        assert_eq!(
            view.degradation(),
            Some(Degradation::MissingFieldValue { field: "usd".to_string(), count: 2 })
        );

        vm.on_header_click(TableKind::Rewards.field("usd").unwrap()).unwrap();
        assert_eq!(usd_values(&vm.view()), vec![7.0, 3.0]);
    }

    #[test]
    fn test_prev_next_noop_at_edges() {
        let mut vm = model(TableKind::Rewards, 10);
        vm.set_collection(Some(rewards(12)));

        assert!(!vm.prev_page());
        assert!(vm.next_page());
        assert!(!vm.next_page());
        assert_eq!(vm.page(), 2);
    }
}
