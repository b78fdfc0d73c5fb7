use serde::{Deserialize, Serialize};

use crate::error::InvalidColumnError;

/// An ordered table of text records sharing one header row.
///
/// Every row holds exactly `headers.len()` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvBatch {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvBatch {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Result<usize, InvalidColumnError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| InvalidColumnError::new(name))
    }

    /// Values of one column in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&str>, InvalidColumnError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    /// Rewrite every value of one column in place, row order preserved.
    pub fn map_column(
        &mut self,
        name: &str,
        mut f: impl FnMut(&str) -> String,
    ) -> Result<(), InvalidColumnError> {
        let idx = self.column_index(name)?;
        for row in &mut self.rows {
            row[idx] = f(&row[idx]);
        }
        Ok(())
    }
}
