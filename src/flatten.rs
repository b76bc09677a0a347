/// Tree flattening - suite trees to flat testcase records
///
/// Walks product → suite → sub-suite → testcase depth-first and emits one
/// record per testcase in document order. Spreadsheet merging relies on
/// that order, since only adjacent identical module names are merged.
use crate::classify::{Priority, TestResult};
use crate::config::ConversionConfig;
use crate::project::synthesize_steps;
use crate::types::{FlatTestcase, Product, SubSuite, TestCase};

/// Placeholder for a missing third-level module
pub const MISSING_THIRD_MODULE: &str = "-";

/// Placeholder for an empty module name
pub const EMPTY_MODULE: &str = "/";

/// Rewrite full-width parentheses to ASCII; empty names become `/`
pub fn normalize_module(name: &str) -> String {
    if name.is_empty() {
        return EMPTY_MODULE.to_string();
    }
    name.replace('（', "(").replace('）', ")")
}

/// Second- and third-level module names from a sub-suite path
pub fn split_path(path: &str, separator: &str) -> (String, String) {
    let mut segments = path.split(separator);
    let second = segments.next().unwrap_or_default().trim().to_string();
    let third = segments.next().map(|s| s.trim().to_string()).unwrap_or_else(|| MISSING_THIRD_MODULE.to_string());
    (second, third)
}

fn flatten_testcase(product: &Product, suite_name: &str, sub_suite: &SubSuite, case: &TestCase, separator: &str) -> FlatTestcase {
    let (second, third) = split_path(&case.path, separator);
    let (step_text, expected_text) = synthesize_steps(&case.steps);

    let writer = if case.writer.is_empty() {
        sub_suite.writer.clone().unwrap_or_default()
    } else {
        case.writer.clone()
    };

    FlatTestcase {
        product: product.name.clone(),
        suite: normalize_module(suite_name.trim()),
        second_module: normalize_module(&second),
        third_module: normalize_module(&third),
        title: case.name.clone(),
        precondition: case.preconditions.clone(),
        steps: case.steps.clone(),
        step_text,
        expected_text,
        priority: Priority::name_for_rank(case.priority).to_string(),
        result: TestResult::text_for_code(case.result).to_string(),
        writer,
        executor: case.executor.clone(),
    }
}

/// Flatten one product's tree
pub fn flatten_product(product: &Product, config: &ConversionConfig) -> Vec<FlatTestcase> {
    let mut records = Vec::with_capacity(product.testcase_count());

    for suite in &product.suites {
        for sub_suite in &suite.sub_suites {
            for case in &sub_suite.testcases {
                records.push(flatten_testcase(product, &suite.name, sub_suite, case, &config.separator));
            }
        }
    }

    records
}

/// Flatten every product of a document, products in document order
pub fn flatten_products(products: &[Product], config: &ConversionConfig) -> Vec<FlatTestcase> {
    products.iter().flat_map(|product| flatten_product(product, config)).collect()
}

#[cfg(test)]
#[path = "flatten_test.rs"]
mod flatten_test;
