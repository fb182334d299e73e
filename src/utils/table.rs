//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns, so accented names and coloured
//! cells line up.

use crate::utils::formatting::{display_width, pad_right};

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    /// Column sized to its content when rendered.
    pub fn auto(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: 0,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub indent: usize,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            indent: 0,
        }
    }

    pub fn indented(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| display_width(c))
                    .max()
                    .unwrap_or(0);
                col.width.max(display_width(&col.header)).max(content)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let prefix = " ".repeat(self.indent);
        let mut out = String::new();

        // Header
        out.push_str(&prefix);
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&col.header, *w));
            out.push(' ');
        }
        out.truncate(out.trim_end().len());
        out.push('\n');

        // Rows
        for row in &self.rows {
            let mut line = prefix.clone();
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                line.push_str(&pad_right(cell, *w));
                line.push(' ');
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}
