//! Logical sheet layout.
//!
//! Row indices are sheet rows counted from zero: the header is row 0 and
//! input record `i` lands on row `i + 1`. Column indices follow the order of
//! `SheetLayout::columns`.

use super::{CellValue, RowMap};
use crate::error::{ConvertError, Result};
use log::debug;

pub const HEADER_ROW: usize = 0;
pub const FIRST_DATA_ROW: usize = 1;

pub const VALIDATION_ERROR_TITLE: &str = "Invalid input";
pub const VALIDATION_ERROR_MESSAGE: &str = "Input value is not allowed";
pub const VALIDATION_PROMPT_TITLE: &str = "Options";
pub const VALIDATION_PROMPT: &str = "Please select an option";

/// Everything the engine needs besides the rows themselves
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// Column titles, in sheet order
    pub columns: Vec<String>,
    pub dropdowns: Vec<Dropdown>,
    /// Columns whose consecutive identical values are merged
    pub merge_columns: Vec<String>,
    pub min_width: usize,
    pub max_width: usize,
}

/// A column restricted to a closed list of values
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    pub column: String,
    pub options: Vec<String>,
}

/// Visual treatment of a sheet row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Filled, bordered, centred and wrapped
    Header,
    /// Bordered, centred and wrapped
    Data,
}

/// One list validation rule covering a column's data rows
#[derive(Debug, Clone, PartialEq)]
pub struct ListValidation {
    pub column: usize,
    pub first_row: usize,
    pub last_row: usize,
    pub options: Vec<String>,
}

/// Cells `first_row..=last_row` of `column` rendered as one spanning cell
#[derive(Debug, Clone, PartialEq)]
pub struct MergeRange {
    pub column: usize,
    pub first_row: usize,
    pub last_row: usize,
    pub value: CellValue,
}

/// A maximal run of identical consecutive values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSpan {
    pub start: usize,
    pub len: usize,
}

/// The laid-out sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub header: Vec<String>,
    /// Data rows, each with one cell per header column
    pub rows: Vec<Vec<CellValue>>,
    pub widths: Vec<usize>,
    pub validations: Vec<ListValidation>,
    pub merges: Vec<MergeRange>,
}

impl Grid {
    /// Sheet rows including the header
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn style_for_row(&self, row: usize) -> CellStyle {
        if row == HEADER_ROW { CellStyle::Header } else { CellStyle::Data }
    }
}

/// Split a column's values into runs of identical consecutive values.
///
/// Every value belongs to exactly one span, singletons included; callers
/// decide which spans are worth merging.
pub fn merge_spans<T: PartialEq>(values: &[T]) -> Vec<RunSpan> {
    let mut spans = Vec::new();
    let mut start = 0;

    for i in 1..values.len() {
        if values[i] != values[start] {
            spans.push(RunSpan { start, len: i - start });
            start = i;
        }
    }

    // The final run is never closed by a value change
    if start < values.len() {
        spans.push(RunSpan { start, len: values.len() - start });
    }

    spans
}

fn column_index(layout: &SheetLayout, name: &str) -> Result<usize> {
    layout.columns.iter().position(|c| c == name).ok_or_else(|| ConvertError::UnknownColumn(name.to_string()))
}

fn column_width(header: &str, cells: &[Vec<CellValue>], column: usize, min_width: usize, max_width: usize) -> usize {
    let longest = cells
        .iter()
        .map(|row| row[column].as_str().chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0);

    (longest + 2).min(max_width).max(min_width)
}

/// Lay out `rows` according to `layout`.
///
/// Columns missing from a row map are written as empty text. Dropdown and
/// merge columns must name columns of the layout.
pub fn build_grid(rows: &[RowMap], layout: &SheetLayout) -> Result<Grid> {
    let cells: Vec<Vec<CellValue>> = rows
        .iter()
        .map(|row| layout.columns.iter().map(|column| row.get(column).cloned().unwrap_or_default()).collect())
        .collect();

    let widths = layout
        .columns
        .iter()
        .enumerate()
        .map(|(i, header)| column_width(header, &cells, i, layout.min_width, layout.max_width))
        .collect();

    let mut validations = Vec::with_capacity(layout.dropdowns.len());
    for dropdown in &layout.dropdowns {
        let column = column_index(layout, &dropdown.column)?;
        if cells.is_empty() {
            continue;
        }
        validations.push(ListValidation {
            column,
            first_row: FIRST_DATA_ROW,
            last_row: cells.len(),
            options: dropdown.options.clone(),
        });
    }

    let mut merges = Vec::new();
    for name in &layout.merge_columns {
        let column = column_index(layout, name)?;
        let values: Vec<&CellValue> = cells.iter().map(|row| &row[column]).collect();

        for span in merge_spans(&values) {
            if span.len < 2 {
                continue;
            }
            merges.push(MergeRange {
                column,
                first_row: span.start + FIRST_DATA_ROW,
                last_row: span.start + span.len,
                value: values[span.start].clone(),
            });
        }
    }

    debug!(
        "Laid out {} rows x {} columns: {} validations, {} merged ranges",
        cells.len(),
        layout.columns.len(),
        validations.len(),
        merges.len()
    );

    Ok(Grid { header: layout.columns.clone(), rows: cells, widths, validations, merges })
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
