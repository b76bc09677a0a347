/// Conversion pipelines
///
/// Each pipeline takes the products loaded from one source document and
/// writes one artifact next to it:
/// - flat testcase list → `<stem>.json`
/// - suite statistics report → `<stem>_testsuite.json`
/// - testcase spreadsheet → `<stem>.xlsx`
///
/// An empty product list is a valid input and produces an empty artifact.
use crate::config::ConversionConfig;
use crate::error::Result;
use crate::flatten::flatten_products;
use crate::project::testcase_rows;
use crate::report::{self, ArtifactKind, ProductReport};
use crate::sheet::{self, Grid};
use crate::types::{FlatTestcase, Product};
use log::info;
use std::path::{Path, PathBuf};

/// Flat testcase records for every product
pub fn testcase_list(products: &[Product], config: &ConversionConfig) -> Vec<FlatTestcase> {
    flatten_products(products, config)
}

/// Statistics-augmented suite reports for every product
pub fn testsuite_list(products: &[Product]) -> Vec<ProductReport> {
    report::aggregate_products(products)
}

/// Lay out the testcase spreadsheet without writing it
pub fn testcase_grid(products: &[Product], config: &ConversionConfig) -> Result<Grid> {
    let records = testcase_list(products, config);
    let rows = testcase_rows(&records, config);
    sheet::build_grid(&rows, &config.sheet_layout())
}

fn prepare_destination(source: &Path, kind: ArtifactKind) -> Result<PathBuf> {
    let destination = report::destination_path(source, kind);
    report::ensure_not_source(source, &destination)?;
    Ok(destination)
}

/// Destinations of every requested artifact, checked before anything is written
pub fn plan_destinations(source: &Path, kinds: &[ArtifactKind]) -> Result<Vec<PathBuf>> {
    kinds.iter().map(|kind| prepare_destination(source, *kind)).collect()
}

pub fn write_testcase_json(source: &Path, products: &[Product], config: &ConversionConfig) -> Result<PathBuf> {
    info!("Start converting {} to testcase json file...", source.display());
    let destination = prepare_destination(source, ArtifactKind::TestcaseJson)?;

    let testcases = testcase_list(products, config);
    report::write_json_file(&testcases, &destination)?;

    info!("Convert {} to a testcase json file({}) successfully!", source.display(), destination.display());
    Ok(destination)
}

pub fn write_testsuite_json(source: &Path, reports: &[ProductReport]) -> Result<PathBuf> {
    info!("Start converting {} to testsuite json file...", source.display());
    let destination = prepare_destination(source, ArtifactKind::SuiteJson)?;

    report::write_json_file(reports, &destination)?;

    info!("Convert {} to a testsuite json file({}) successfully!", source.display(), destination.display());
    Ok(destination)
}

pub fn write_testcase_xlsx(source: &Path, products: &[Product], config: &ConversionConfig) -> Result<PathBuf> {
    info!("Start converting {} to excel file...", source.display());
    let destination = prepare_destination(source, ArtifactKind::Spreadsheet)?;

    let grid = testcase_grid(products, config)?;
    report::remove_existing(&destination)?;
    sheet::save_workbook(&grid, &destination)?;

    info!("Convert {} to an excel file({}) successfully!", source.display(), destination.display());
    Ok(destination)
}

/// Write one artifact of the given kind.
///
/// `reports` must be the aggregation of `products`; it is only read for the
/// suite report.
pub fn write_artifact(
    kind: ArtifactKind,
    source: &Path,
    products: &[Product],
    reports: &[ProductReport],
    config: &ConversionConfig,
) -> Result<PathBuf> {
    match kind {
        ArtifactKind::Spreadsheet => write_testcase_xlsx(source, products, config),
        ArtifactKind::TestcaseJson => write_testcase_json(source, products, config),
        ArtifactKind::SuiteJson => write_testsuite_json(source, reports),
    }
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod convert_test;
