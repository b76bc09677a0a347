/// Core data structures for suite trees and flattened testcases
///
/// The suite tree (`Product` → `Suite` → `SubSuite` → `TestCase` → `Step`)
/// is the model produced by the mind-map parser. It is read-only for the
/// converter. `FlatTestcase` is the derived one-row-per-testcase record
/// shared by the JSON and spreadsheet paths.
use serde::{Deserialize, Serialize};

fn default_priority() -> i64 {
    crate::classify::Priority::DEFAULT.rank()
}

/// A parsed document: one product per mind-map canvas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteDocument {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Product-level container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub suites: Vec<Suite>,
}

impl Product {
    /// Number of testcases across every sub-suite of every suite
    pub fn testcase_count(&self) -> usize {
        self.suites.iter().flat_map(|s| &s.sub_suites).map(|sub| sub.testcases.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    pub name: String,
    #[serde(default)]
    pub sub_suites: Vec<SubSuite>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubSuite {
    pub name: String,
    /// Default writer for testcases that name none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writer: Option<String>,
    #[serde(default)]
    pub testcases: Vec<TestCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    #[serde(default)]
    pub preconditions: String,
    /// Sub-suite hierarchy joined by the configured separator, e.g. "UI/Login"
    #[serde(default)]
    pub path: String,
    /// Raw priority rank (1..=4)
    #[serde(default = "default_priority")]
    pub priority: i64,
    /// Raw result code
    #[serde(default)]
    pub result: i64,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub executor: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Explicit step number; the 1-based position is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default)]
    pub actions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

/// One testcase with its hierarchy context inlined
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatTestcase {
    pub product: String,
    pub suite: String,
    pub second_module: String,
    pub third_module: String,
    pub title: String,
    pub precondition: String,
    pub steps: Vec<Step>,
    pub step_text: String,
    pub expected_text: String,
    /// Priority name
    pub priority: String,
    /// Result display text
    pub result: String,
    pub writer: String,
    pub executor: String,
}

#[cfg(test)]
#[path = "data_structures_test.rs"]
mod data_structures_test;
