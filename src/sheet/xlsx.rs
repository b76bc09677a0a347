//! Rendering a `Grid` into an `.xlsx` workbook.

use super::grid::{
    CellStyle, FIRST_DATA_ROW, Grid, HEADER_ROW, VALIDATION_ERROR_MESSAGE, VALIDATION_ERROR_TITLE, VALIDATION_PROMPT,
    VALIDATION_PROMPT_TITLE,
};
use super::CellValue;
use crate::error::{ConvertError, Result};
use log::debug;
use rust_xlsxwriter::{Color, ColNum, DataValidation, Format, FormatAlign, FormatBorder, Formula, RowNum, Workbook};
use std::path::Path;

/// Header background (light green)
const HEADER_FILL: u32 = 0x92D050;

fn format_for(style: CellStyle) -> Format {
    let format = Format::new().set_border(FormatBorder::Thin).set_align(FormatAlign::VerticalCenter).set_text_wrap();
    match style {
        CellStyle::Header => format.set_background_color(Color::RGB(HEADER_FILL)),
        CellStyle::Data => format,
    }
}

fn row_num(row: usize) -> Result<RowNum> {
    RowNum::try_from(row).map_err(|_| ConvertError::Config(format!("row {} exceeds the worksheet limit", row)))
}

fn col_num(column: usize) -> Result<ColNum> {
    ColNum::try_from(column).map_err(|_| ConvertError::Config(format!("column {} exceeds the worksheet limit", column)))
}

/// Build an in-memory workbook with a single sheet holding `grid`
fn render_workbook(grid: &Grid) -> Result<Workbook> {
    debug!("Rendering {} sheet rows", grid.row_count());

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = format_for(CellStyle::Header);
    let data_format = format_for(CellStyle::Data);

    let header_row = row_num(HEADER_ROW)?;
    for (column, title) in grid.header.iter().enumerate() {
        worksheet.write_string_with_format(header_row, col_num(column)?, title, &header_format)?;
    }

    for (index, cells) in grid.rows.iter().enumerate() {
        let row = index + FIRST_DATA_ROW;
        let format = match grid.style_for_row(row) {
            CellStyle::Header => &header_format,
            CellStyle::Data => &data_format,
        };

        for (column, cell) in cells.iter().enumerate() {
            let (r, c) = (row_num(row)?, col_num(column)?);
            match cell {
                CellValue::Text(text) => {
                    worksheet.write_string_with_format(r, c, text, format)?;
                }
                CellValue::Formula(formula) => {
                    worksheet.write_formula_with_format(r, c, Formula::new(formula), format)?;
                }
            }
        }
    }

    for (column, width) in grid.widths.iter().enumerate() {
        worksheet.set_column_width(col_num(column)?, *width as f64)?;
    }

    for rule in &grid.validations {
        let validation = DataValidation::new()
            .allow_list_strings(rule.options.as_slice())?
            .ignore_blank(true)
            .set_error_title(VALIDATION_ERROR_TITLE)?
            .set_error_message(VALIDATION_ERROR_MESSAGE)?
            .set_input_title(VALIDATION_PROMPT_TITLE)?
            .set_input_message(VALIDATION_PROMPT)?;

        let column = col_num(rule.column)?;
        worksheet.add_data_validation(row_num(rule.first_row)?, column, row_num(rule.last_row)?, column, &validation)?;
    }

    for merge in &grid.merges {
        let column = col_num(merge.column)?;
        let (first, last) = (row_num(merge.first_row)?, row_num(merge.last_row)?);
        match &merge.value {
            CellValue::Text(text) => {
                worksheet.merge_range(first, column, last, column, text, &data_format)?;
            }
            // merge_range only takes text; the formula goes into the top-left cell afterwards
            CellValue::Formula(formula) => {
                worksheet.merge_range(first, column, last, column, "", &data_format)?;
                worksheet.write_formula_with_format(first, column, Formula::new(formula), &data_format)?;
            }
        }
    }

    Ok(workbook)
}

/// Write `grid` to `path`, replacing any existing file
pub fn save_workbook(grid: &Grid, path: &Path) -> Result<()> {
    let mut workbook = render_workbook(grid)?;
    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{Dropdown, RowMap, SheetLayout, build_grid};
    use std::io::{Cursor, Read};

    fn sample_grid() -> Grid {
        let rows: Vec<RowMap> = ["Login", "Login", "Cart"]
            .iter()
            .map(|module| {
                RowMap::from([
                    ("No.".to_string(), CellValue::Formula("=ROW()-1".to_string())),
                    ("Module".to_string(), CellValue::Text(module.to_string())),
                    ("Result".to_string(), CellValue::Text("PASS".to_string())),
                ])
            })
            .collect();
        let layout = SheetLayout {
            columns: vec!["No.".to_string(), "Module".to_string(), "Result".to_string()],
            dropdowns: vec![Dropdown { column: "Result".to_string(), options: vec!["PASS".into(), "NG".into()] }],
            merge_columns: vec!["Module".to_string()],
            min_width: 10,
            max_width: 30,
        };
        build_grid(&rows, &layout).unwrap()
    }

    #[test]
    fn test_workbook_is_a_zip_container() {
        let bytes = render_workbook(&sample_grid()).unwrap().save_to_buffer().unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    fn sheet_part(bytes: Vec<u8>, name: &str) -> Option<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name(name).ok()?;
        let mut xml = String::new();
        part.read_to_string(&mut xml).unwrap();
        Some(xml)
    }

    #[test]
    fn test_sheet_xml_has_merges_and_shared_validation() {
        let bytes = render_workbook(&sample_grid()).unwrap().save_to_buffer().unwrap();
        let xml = sheet_part(bytes, "xl/worksheets/sheet1.xml").unwrap();

        assert!(xml.contains(r#"<mergeCell ref="B2:B3"/>"#), "{}", xml);
        assert_eq!(xml.matches("<mergeCell ").count(), 1);

        assert_eq!(xml.matches("<dataValidation ").count(), 1);
        assert!(xml.contains(r#"sqref="C2:C4""#), "{}", xml);
        assert!(xml.contains(r#""PASS,NG""#), "{}", xml);

        assert_eq!(xml.matches("<f>ROW()-1</f>").count(), 3);
    }

    #[test]
    fn test_merged_formula_stays_a_formula() {
        let rows: Vec<RowMap> = (0..3)
            .map(|_| RowMap::from([("No.".to_string(), CellValue::Formula("=ROW()-1".to_string()))]))
            .collect();
        let layout = SheetLayout {
            columns: vec!["No.".to_string()],
            dropdowns: vec![],
            merge_columns: vec!["No.".to_string()],
            min_width: 10,
            max_width: 30,
        };
        let grid = build_grid(&rows, &layout).unwrap();
        let bytes = render_workbook(&grid).unwrap().save_to_buffer().unwrap();

        let xml = sheet_part(bytes.clone(), "xl/worksheets/sheet1.xml").unwrap();
        assert!(xml.contains(r#"<mergeCell ref="A2:A4"/>"#), "{}", xml);
        assert!(xml.contains("<f>ROW()-1</f>"), "{}", xml);

        let shared = sheet_part(bytes, "xl/sharedStrings.xml").unwrap_or_default();
        assert!(!shared.contains("ROW()"), "{}", shared);
    }

    #[test]
    fn test_save_workbook_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.xlsx");

        save_workbook(&sample_grid(), &path).unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_empty_grid_renders() {
        let layout = SheetLayout {
            columns: vec!["Title".to_string()],
            dropdowns: vec![],
            merge_columns: vec![],
            min_width: 10,
            max_width: 30,
        };
        let grid = build_grid(&[], &layout).unwrap();
        assert!(render_workbook(&grid).unwrap().save_to_buffer().unwrap().starts_with(b"PK"));
    }
}
