//! Observation tables: named, equal-length columns of numbers or text.
//!
//! The heatmap builder only ever borrows a table, so callers can reuse the
//! same table across calls and threads.

use crate::error::{GraphtError, Result};
use serde::{Deserialize, Serialize};

/// A single column of an [`ObservationTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Column {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The numeric values, or `None` for a text column.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Column::Numeric(values) => Some(values),
            Column::Text(_) => None,
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Numeric(values)
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::Text(values)
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Column::Text(values.into_iter().map(str::to_string).collect())
    }
}

/// An ordered collection of records stored column-wise.
///
/// Deserialized tables go through [`add_column`](ObservationTable::add_column),
/// so ragged input is rejected rather than truncated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct ObservationTable {
    columns: Vec<(String, Column)>,
}

#[derive(Deserialize)]
struct RawTable {
    columns: Vec<(String, Column)>,
}

impl TryFrom<RawTable> for ObservationTable {
    type Error = GraphtError;

    fn try_from(raw: RawTable) -> Result<Self> {
        let mut table = Self::new();
        for (name, column) in raw.columns {
            table.add_column(name, column)?;
        }
        Ok(table)
    }
}

impl ObservationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a three-column numeric table from `(x, y, hue)` rows.
    pub fn from_rows(
        x_field: &str,
        y_field: &str,
        hue_field: &str,
        rows: &[(f64, f64, f64)],
    ) -> Self {
        let mut xs = Vec::with_capacity(rows.len());
        let mut ys = Vec::with_capacity(rows.len());
        let mut hues = Vec::with_capacity(rows.len());
        for &(x, y, hue) in rows {
            xs.push(x);
            ys.push(y);
            hues.push(hue);
        }
        Self {
            columns: vec![
                (x_field.to_string(), Column::Numeric(xs)),
                (y_field.to_string(), Column::Numeric(ys)),
                (hue_field.to_string(), Column::Numeric(hues)),
            ],
        }
    }

    /// Add or replace a column. All columns must share the row count.
    pub fn add_column(&mut self, name: impl Into<String>, column: impl Into<Column>) -> Result<()> {
        let name = name.into();
        let column = column.into();

        if let Some((_, other)) = self.columns.iter().find(|(existing, _)| *existing != name) {
            if other.len() != column.len() {
                return Err(GraphtError::ColumnLengthMismatch {
                    field: name,
                    expected: other.len(),
                    actual: column.len(),
                });
            }
        }

        match self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = column,
            None => self.columns.push((name, column)),
        }
        Ok(())
    }

    /// Builder-style [`add_column`](Self::add_column).
    pub fn with_column(mut self, name: impl Into<String>, column: impl Into<Column>) -> Result<Self> {
        self.add_column(name, column)?;
        Ok(self)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, column)| column)
    }

    /// Numeric values of a column.
    ///
    /// Fails with `MissingField` if absent and `NonNumericField` if text.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        let column = self
            .column(name)
            .ok_or_else(|| GraphtError::MissingField(name.to_string()))?;
        column
            .as_numeric()
            .ok_or_else(|| GraphtError::NonNumericField(name.to_string()))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|(_, c)| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}
