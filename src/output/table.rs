//! Native two-dimensional table and the converter from artifact tables.

use crate::artifact::{Cell, Table};

/// One native table cell. Mirrors the loose typing of artifact cells;
/// conversion never reinterprets numeric vs. string content.
#[derive(Debug, Clone, PartialEq)]
pub enum TableValue {
    Long(i64),
    Double(f64),
    Str(String),
    Empty,
}

impl From<&Cell> for TableValue {
    fn from(cell: &Cell) -> Self {
        match cell {
            Cell::Long(v) => TableValue::Long(*v),
            Cell::Double(v) => TableValue::Double(*v),
            Cell::Str(s) => TableValue::Str(s.clone()),
            Cell::Empty => TableValue::Empty,
        }
    }
}

/// The platform's native table representation.
///
/// Row and column order carry meaning (confusion-matrix ordering matches the
/// class domain ordering); construction and conversion preserve both exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimTable {
    pub header: String,
    pub description: String,
    pub row_headers: Vec<String>,
    pub col_headers: Vec<String>,
    pub col_types: Vec<String>,
    pub col_formats: Vec<String>,
    pub col_header_for_row_headers: String,
    cells: Vec<Vec<TableValue>>,
}

impl TwoDimTable {
    /// An empty grid sized `row_headers.len() x col_headers.len()`, every
    /// cell [`TableValue::Empty`] until set.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        header: impl Into<String>,
        description: impl Into<String>,
        row_headers: Vec<String>,
        col_headers: Vec<String>,
        col_types: Vec<String>,
        col_formats: Vec<String>,
        col_header_for_row_headers: impl Into<String>,
    ) -> Self {
        let cells = vec![vec![TableValue::Empty; col_headers.len()]; row_headers.len()];
        Self {
            header: header.into(),
            description: description.into(),
            row_headers,
            col_headers,
            col_types,
            col_formats,
            col_header_for_row_headers: col_header_for_row_headers.into(),
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.row_headers.len()
    }

    pub fn cols(&self) -> usize {
        self.col_headers.len()
    }

    pub fn set(&mut self, row: usize, col: usize, value: TableValue) {
        self.cells[row][col] = value;
    }

    pub fn get(&self, row: usize, col: usize) -> &TableValue {
        &self.cells[row][col]
    }
}

/// Convert an artifact table into the native representation, cell-for-cell.
/// An absent source table stays absent.
pub fn convert_table(source: Option<&Table>) -> Option<TwoDimTable> {
    let source = source?;
    let mut table = TwoDimTable::new(
        source.header.clone(),
        source.description.clone(),
        source.row_headers.clone(),
        source.col_headers.clone(),
        source.col_types.clone(),
        source.col_formats.clone(),
        source.col_header_for_row_headers.clone(),
    );
    for row in 0..source.rows() {
        for col in 0..source.cols() {
            table.set(row, col, source.cell(row, col).into());
        }
    }
    Some(table)
}
