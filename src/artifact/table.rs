//! Generic tabular structures carried inside artifact attributes.
//!
//! Model summaries, scoring history, confusion matrices and the like all
//! arrive as one loosely-typed table shape. Cell values keep whatever type
//! the producer wrote; conversion to the native table representation never
//! reinterprets them.

use serde::{Deserialize, Serialize};

/// One table cell. Producers write integers, floats or strings; absent
/// cells are explicit nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Long(i64),
    Double(f64),
    Str(String),
    Empty,
}

/// A generic artifact table.
///
/// The grid is row-major: `cells[row][col]`. Row and column order are
/// semantically meaningful (confusion-matrix ordering matches the class
/// domain ordering) and must be preserved by any consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub header: String,
    #[serde(default)]
    pub description: String,
    pub row_headers: Vec<String>,
    pub col_headers: Vec<String>,
    /// Per-column type tags, e.g. `"long"`, `"double"`, `"string"`.
    pub col_types: Vec<String>,
    /// Per-column printf-style display formats, e.g. `"%d"`, `"%.5f"`.
    pub col_formats: Vec<String>,
    /// Label shown above the row-header column.
    #[serde(default)]
    pub col_header_for_row_headers: String,
    pub cells: Vec<Vec<Cell>>,
}

impl Table {
    pub fn rows(&self) -> usize {
        self.row_headers.len()
    }

    pub fn cols(&self) -> usize {
        self.col_headers.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cells_parse_as_their_json_type() {
        let v = json!({
            "header": "Confusion Matrix",
            "description": "row: actual, col: predicted",
            "row_headers": ["no", "yes", "Totals"],
            "col_headers": ["no", "yes", "Error"],
            "col_types": ["long", "long", "double"],
            "col_formats": ["%d", "%d", "%.4f"],
            "col_header_for_row_headers": "Actual/Predicted",
            "cells": [[80, 5, 0.0588], [3, 12, 0.2], [null, "83 / 100", 1]]
        });
        let t: Table = serde_json::from_value(v).unwrap();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 3);
        assert_eq!(*t.cell(0, 0), Cell::Long(80));
        assert_eq!(*t.cell(0, 2), Cell::Double(0.0588));
        assert_eq!(t.cells[2][0], Cell::Empty);
        assert_eq!(t.cells[2][1], Cell::Str("83 / 100".into()));
        assert_eq!(t.cells[2][2], Cell::Long(1));
    }

    #[test]
    fn empty_table_parses() {
        let v = json!({
            "header": "Scoring History",
            "row_headers": [],
            "col_headers": ["duration", "rmse"],
            "col_types": ["string", "double"],
            "col_formats": ["%s", "%.5f"],
            "cells": []
        });
        let t: Table = serde_json::from_value(v).unwrap();
        assert_eq!(t.rows(), 0);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.description, "");
    }
}
