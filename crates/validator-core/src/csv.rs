//! CSV rendering for report tables.
//!
//! Values are wrapped in double quotes without escaping, so embedded quotes
//! or newlines produce malformed rows.

use serde_json::{Map, Value};

/// One exported row: column name to cell value, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportRow {
    cells: Vec<(String, String)>,
}

impl ExportRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell, replacing the value if the column already exists.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(c, _)| *c == column) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    /// Build a row from a JSON object, keeping key order.
    pub fn from_json(object: &Map<String, Value>) -> Self {
        let mut row = Self::new();
        for (key, value) in object {
            row.insert(key.clone(), cell_text(value));
        }
        row
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExportRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// Text of a JSON value as it appears in a cell.
///
/// Falsy values (`null`, `false`, `0`, `""`) render empty.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Parse rows from a JSON array of objects.
///
/// Non-object entries become rows with no cells, which render as all-empty.
pub fn rows_from_json(value: &Value) -> Vec<ExportRow> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| item.as_object().map(ExportRow::from_json).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default()
}

/// Render rows as CSV text.
///
/// Headers come from the first row's columns. Every row is rendered against
/// those headers; a missing column renders as `""`. No input gives an empty
/// string.
pub fn convert_to_csv(rows: &[ExportRow]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let headers: Vec<&str> = first.columns().collect();
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));

    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| format!("\"{}\"", row.get(header).unwrap_or_default()))
            .collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}
