//! Statistics aggregation for suite reports.
//!
//! Counts testcase results per sub-suite and rolls them up per product in
//! one walk of the tree: each sub-suite's counters are folded into the
//! product counters as soon as the sub-suite is finished, so the product
//! totals are always the sum of the sub-suite totals.

use crate::classify::TestResult;
use crate::types::{Product, SubSuite, TestCase};
use log::{debug, warn};
use serde::Serialize;

fn is_zero(n: &usize) -> bool {
    *n == 0
}

/// Result counters for a sub-suite or a product
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Every testcase, including ones with an unclassified result
    pub case_num: usize,
    pub non_execution: usize,
    pub pass: usize,
    pub failed: usize,
    pub blocked: usize,
    pub skipped: usize,
    /// Testcases whose result code is outside the result table
    #[serde(skip_serializing_if = "is_zero")]
    pub unclassified: usize,
}

impl Statistics {
    pub fn record(&mut self, result: TestResult) {
        match result {
            TestResult::NonExecution => self.non_execution += 1,
            TestResult::Pass => self.pass += 1,
            TestResult::Failed => self.failed += 1,
            TestResult::Blocked => self.blocked += 1,
            TestResult::Skipped => self.skipped += 1,
        }
    }

    /// Add another record's counters to this one
    pub fn absorb(&mut self, other: &Statistics) {
        self.case_num += other.case_num;
        self.non_execution += other.non_execution;
        self.pass += other.pass;
        self.failed += other.failed;
        self.blocked += other.blocked;
        self.skipped += other.skipped;
        self.unclassified += other.unclassified;
    }

    /// Sum of the five result categories
    pub fn classified(&self) -> usize {
        self.non_execution + self.pass + self.failed + self.blocked + self.skipped
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubSuiteReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer: Option<String>,
    pub statistics: Statistics,
    pub testcases: Vec<TestCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteReport {
    pub name: String,
    pub sub_suites: Vec<SubSuiteReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductReport {
    pub name: String,
    pub statistics: Statistics,
    pub suites: Vec<SuiteReport>,
}

fn sub_suite_statistics(sub_suite: &SubSuite) -> Statistics {
    let mut statistics = Statistics { case_num: sub_suite.testcases.len(), ..Statistics::default() };

    for case in &sub_suite.testcases {
        match TestResult::from_code(case.result) {
            Some(result) => statistics.record(result),
            None => {
                statistics.unclassified += 1;
                warn!("This testcase result is abnormal: {}, please check it: {:?}", case.result, case);
            }
        }
    }

    statistics
}

/// Per-sub-suite statistics plus the product rollup
pub fn aggregate_product(product: &Product) -> ProductReport {
    let mut product_statistics = Statistics::default();
    let mut suites = Vec::with_capacity(product.suites.len());

    for suite in &product.suites {
        let mut sub_suites = Vec::with_capacity(suite.sub_suites.len());

        for sub_suite in &suite.sub_suites {
            let statistics = sub_suite_statistics(sub_suite);
            product_statistics.absorb(&statistics);

            sub_suites.push(SubSuiteReport {
                name: sub_suite.name.clone(),
                writer: sub_suite.writer.clone(),
                statistics,
                testcases: sub_suite.testcases.clone(),
            });
        }

        suites.push(SuiteReport { name: suite.name.clone(), sub_suites });
    }

    debug!(
        "Aggregated product {}: {} testcases, {} classified",
        product.name,
        product_statistics.case_num,
        product_statistics.classified()
    );

    ProductReport { name: product.name.clone(), statistics: product_statistics, suites }
}

pub fn aggregate_products(products: &[Product]) -> Vec<ProductReport> {
    products.iter().map(aggregate_product).collect()
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
