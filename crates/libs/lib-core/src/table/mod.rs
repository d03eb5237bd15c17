//! Per-table state: schema, sort, pagination, responsive layout and the view
//! model that ties them together.

pub mod kind;
pub mod layout;
pub mod pagination;
pub mod sort;
pub mod view_model;

pub use kind::{Field, TableKind};
pub use layout::{resolve, Breakpoints, Column, ColumnLayout, ResponsiveClass};
pub use pagination::{max_page, PageSpec, Pagination};
pub use sort::{SortChange, SortDirection, SortIndicator, SortSpec, SortState};
pub use view_model::{TableStatus, TableView, TableViewModel};
