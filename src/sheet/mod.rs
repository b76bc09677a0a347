//! Spreadsheet authoring engine.
//!
//! Rows arrive as title-keyed maps sharing one column schema. `grid` lays
//! them out into a logical sheet (header, data cells, column widths,
//! dropdown validations, merged runs) without touching any file format;
//! `xlsx` renders that grid into a workbook.
//!
//! # Module Organization
//!
//! - `grid` - Logical layout, width calculation and merge-span detection
//! - `xlsx` - Rendering a grid with `rust_xlsxwriter`

mod grid;
mod xlsx;

use std::collections::HashMap;

pub use grid::{Dropdown, Grid, SheetLayout, build_grid};
pub use xlsx::save_workbook;

/// Value of a single cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellValue {
    Text(String),
    /// Formula source, e.g. `=ROW()-1`
    Formula(String),
}

impl CellValue {
    /// Text as it appears in the cell source; formulas keep their `=` prefix
    pub fn as_str(&self) -> &str {
        match self {
            CellValue::Text(s) | CellValue::Formula(s) => s,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

/// One input row: column title to cell value
pub type RowMap = HashMap<String, CellValue>;
