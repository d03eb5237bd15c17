//! # Text Renderer
//!
//! Plain-text dump of a [`DashboardView`]: one block per table with a header
//! row, the visible page of rows and a `Page X of Y` footer. Footer arrows
//! that would be faded are left blank.

use std::fmt::Write;

use lib_core::config::DateFields;
use lib_core::table::{Column, ResponsiveClass, TableStatus};
use lib_core::{Config, DashboardView, FieldValue, Record, TableView};
use shared::utils::truncate_address;

/// Fields holding wallet addresses, shortened below the wide layout.
const ADDRESS_FIELDS: &[&str] = &["address", "sender", "receiver", "outputAddress"];

const MISSING: &str = "-";

/// Renders dashboard views as aligned text.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    date_fields: DateFields,
}

impl TextRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            date_fields: config.date_fields.clone(),
        }
    }

    pub fn render(&self, view: &DashboardView<'_>) -> String {
        let mut out = String::new();

        let provider = view.provider.unwrap_or("(none selected)");
        let liquidity = view
            .total_liquidity
            .map(|v| format!("${:.2}", v))
            .unwrap_or_else(|| "loading".to_string());
        let _ = writeln!(out, "Provider: {}    Total liquidity: {}", provider, liquidity);

        for table in view.tables() {
            out.push('\n');
            self.render_table(&mut out, table);
        }

        out
    }

    /// One table block.
    pub fn render_table(&self, out: &mut String, table: &TableView<'_>) {
        let _ = writeln!(out, "== {} ==", table.kind.title());

        match table.status {
            TableStatus::Loading => {
                let _ = writeln!(out, "Loading...");
                return;
            }
            TableStatus::Empty => {
                let _ = writeln!(out, "{}", table.empty_message.unwrap_or_default());
                return;
            }
            TableStatus::Populated => {}
        }

        let headers: Vec<String> = table
            .columns
            .iter()
            .map(|c| match table.glyph_for(c) {
                Some(glyph) => format!("{} {}", c.label, glyph),
                None => c.label.to_string(),
            })
            .collect();

        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|r| {
                table
                    .columns
                    .iter()
                    .map(|c| self.cell(r, c, table.class))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..headers.len())
            .map(|i| {
                rows.iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(headers[i].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write_row(out, &headers, &widths);
        for row in &rows {
            write_row(out, row, &widths);
        }

        let _ = writeln!(
            out,
            "{} {} {}",
            if table.can_prev { "<" } else { " " },
            table.page_label(),
            if table.can_next { ">" } else { " " },
        );
    }

    fn cell(&self, record: &Record, column: &Column, class: ResponsiveClass) -> String {
        let key = source_key(column);
        let Some(value) = record.get(key) else {
            return MISSING.to_string();
        };

        if self.date_fields.contains(key) {
            return value
                .as_date()
                .map(|d| FieldValue::Date(d).to_string())
                .unwrap_or_else(|| MISSING.to_string());
        }

        let text = value.to_string();
        if class != ResponsiveClass::Wide && ADDRESS_FIELDS.contains(&key) {
            truncate_address(&text)
        } else {
            text
        }
    }
}

/// Record field a column reads from. Display-only columns read a fixed field.
fn source_key(column: &Column) -> &'static str {
    match (column.field, column.label) {
        (Some(field), _) => field.name(),
        (None, "Provider") => "name",
        (None, "Pair") => "pair",
        (None, label) => label,
    }
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", line.trim_end());
}
