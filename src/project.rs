/// Row projection - flat testcase records to spreadsheet rows
///
/// This module handles:
/// - The fixed 14-column output schema
/// - Synthesizing numbered step / expected-result text from step records
/// - Mapping a flat record to its ordered cells and to a title-keyed row
use crate::config::ConversionConfig;
use crate::sheet::{CellValue, RowMap};
use crate::types::{FlatTestcase, Step};
use serde::Deserialize;

/// Spreadsheet formula for the sequence column: the row's position below the header
pub const SEQUENCE_FORMULA: &str = "=ROW()-1";

/// Output columns, in sheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Number,
    FirstModule,
    SecondModule,
    ThirdModule,
    Priority,
    Title,
    Precondition,
    Steps,
    ExpectedResults,
    Result,
    TrackerId,
    Writer,
    Executor,
    Comment,
}

impl Column {
    pub const ALL: [Column; 14] = [
        Column::Number,
        Column::FirstModule,
        Column::SecondModule,
        Column::ThirdModule,
        Column::Priority,
        Column::Title,
        Column::Precondition,
        Column::Steps,
        Column::ExpectedResults,
        Column::Result,
        Column::TrackerId,
        Column::Writer,
        Column::Executor,
        Column::Comment,
    ];

    pub fn default_title(&self) -> &'static str {
        match self {
            Column::Number => "No.",
            Column::FirstModule => "Level 1 Module",
            Column::SecondModule => "Level 2 Module",
            Column::ThirdModule => "Level 3 Module",
            Column::Priority => "Priority",
            Column::Title => "Title",
            Column::Precondition => "Precondition",
            Column::Steps => "Steps",
            Column::ExpectedResults => "Expected Result",
            Column::Result => "Result",
            Column::TrackerId => "JIRA ID",
            Column::Writer => "Writer",
            Column::Executor => "Executor",
            Column::Comment => "Comment",
        }
    }

    /// Identifier used in configuration files
    pub fn id(&self) -> &'static str {
        match self {
            Column::Number => "number",
            Column::FirstModule => "first_module",
            Column::SecondModule => "second_module",
            Column::ThirdModule => "third_module",
            Column::Priority => "priority",
            Column::Title => "title",
            Column::Precondition => "precondition",
            Column::Steps => "steps",
            Column::ExpectedResults => "expected_results",
            Column::Result => "result",
            Column::TrackerId => "tracker_id",
            Column::Writer => "writer",
            Column::Executor => "executor",
            Column::Comment => "comment",
        }
    }
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], "").trim().to_string()
}

/// Build the step text and expected-result text for a step sequence.
///
/// Every step contributes a `"{n}. {actions}"` line to the step text. Only
/// steps with a non-empty expected result contribute to the expected text,
/// keeping their own number, so the two columns may be numbered unevenly.
pub fn synthesize_steps(steps: &[Step]) -> (String, String) {
    let mut step_lines = Vec::with_capacity(steps.len());
    let mut expected_lines = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        let number = step.number.unwrap_or(index as u32 + 1);
        step_lines.push(format!("{}. {}", number, single_line(&step.actions)));

        if let Some(expected) = step.expected.as_deref()
            && !expected.is_empty()
        {
            expected_lines.push(format!("{}. {}", number, single_line(expected)));
        }
    }

    (step_lines.join("\n"), expected_lines.join("\n"))
}

/// Cell for one column of a record
pub fn cell_for(record: &FlatTestcase, column: Column) -> CellValue {
    let text: &str = match column {
        Column::Number => return CellValue::Formula(SEQUENCE_FORMULA.to_string()),
        Column::FirstModule => &record.suite,
        Column::SecondModule => &record.second_module,
        Column::ThirdModule => &record.third_module,
        Column::Priority => &record.priority,
        Column::Title => &record.title,
        Column::Precondition => &record.precondition,
        Column::Steps => &record.step_text,
        Column::ExpectedResults => &record.expected_text,
        Column::Result => &record.result,
        Column::Writer => &record.writer,
        Column::Executor => &record.executor,
        // Not tracked in mind-map documents
        Column::TrackerId | Column::Comment => "",
    };
    CellValue::Text(text.to_string())
}

/// All 14 cells of a record, in `Column::ALL` order
pub fn project_row(record: &FlatTestcase) -> Vec<CellValue> {
    Column::ALL.iter().map(|column| cell_for(record, *column)).collect()
}

/// Title-keyed rows for the authoring engine
pub fn testcase_rows(records: &[FlatTestcase], config: &ConversionConfig) -> Vec<RowMap> {
    let titles = config.column_titles();
    records
        .iter()
        .map(|record| titles.iter().cloned().zip(project_row(record)).collect::<RowMap>())
        .collect()
}

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;
