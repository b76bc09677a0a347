//! Console statistics table.
//!
//! One block per product: a row per sub-suite followed by the product
//! rollup. Suite names are frequently CJK, so label padding is measured in
//! display columns rather than chars.

use super::stats::{ProductReport, Statistics};
use crate::classify::TestResult;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const VALUE_WIDTH: usize = 10;
const MIN_LABEL_WIDTH: usize = 12;

/// Pad `s` with spaces to `width` display columns
pub fn pad_to_width(s: &str, width: usize) -> String {
    let display_w = UnicodeWidthStr::width(s);
    if display_w >= width { s.to_string() } else { format!("{}{}", s, " ".repeat(width - display_w)) }
}

fn counters(statistics: &Statistics) -> [usize; 6] {
    [
        statistics.case_num,
        statistics.non_execution,
        statistics.pass,
        statistics.failed,
        statistics.blocked,
        statistics.skipped,
    ]
}

fn write_row<W: Write>(writer: &mut W, label: &str, label_width: usize, values: &[String]) -> io::Result<()> {
    write!(writer, "{}", pad_to_width(label, label_width))?;
    for value in values {
        write!(writer, "{:>width$}", value, width = VALUE_WIDTH)?;
    }
    writeln!(writer)
}

/// Write the statistics table for one product
pub fn write_statistics_table<W: Write>(writer: &mut W, report: &ProductReport) -> io::Result<()> {
    let labels: Vec<String> = report
        .suites
        .iter()
        .flat_map(|suite| suite.sub_suites.iter().map(move |sub| format!("{} / {}", suite.name, sub.name)))
        .collect();

    let label_width = labels
        .iter()
        .map(|l| UnicodeWidthStr::width(l.as_str()))
        .chain(std::iter::once(UnicodeWidthStr::width(report.name.as_str())))
        .max()
        .unwrap_or(0)
        .max(MIN_LABEL_WIDTH)
        + 2;
    let total_width = label_width + 6 * VALUE_WIDTH;

    writeln!(writer, "\n{}:", report.name)?;

    let mut headers = vec!["cases".to_string()];
    headers.extend(TestResult::texts());
    write_row(writer, "", label_width, &headers)?;
    writeln!(writer, "{}", "━".repeat(total_width))?;

    let sub_suites = report.suites.iter().flat_map(|suite| &suite.sub_suites);
    for (label, sub) in labels.iter().zip(sub_suites) {
        let values: Vec<String> = counters(&sub.statistics).iter().map(|n| n.to_string()).collect();
        write_row(writer, label, label_width, &values)?;
    }

    writeln!(writer, "{}", "━".repeat(total_width))?;
    let totals: Vec<String> = counters(&report.statistics).iter().map(|n| n.to_string()).collect();
    write_row(writer, "Total", label_width, &totals)?;

    if report.statistics.unclassified > 0 {
        writeln!(writer, "⚠ {} testcase(s) with an unknown result code", report.statistics.unclassified)?;
    }

    Ok(())
}

/// Write the statistics table of every product, stopping at the first I/O error
pub fn write_statistics_tables<W: Write>(writer: &mut W, reports: &[ProductReport]) -> io::Result<()> {
    for report in reports {
        write_statistics_table(writer, report)?;
    }
    writer.flush()
}

/// Print statistics tables for every product to stdout
pub fn print_statistics_tables(reports: &[ProductReport]) -> io::Result<()> {
    write_statistics_tables(&mut io::stdout().lock(), reports)
}
