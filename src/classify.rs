/// Classification tables for testcase priority and execution result
///
/// Both tables are closed, ordered domains. The declaration order is the
/// order shown in spreadsheet dropdowns, so it must not be rearranged.
/// Lookups from raw document values never fail: unknown inputs degrade to
/// the table default.

/// Testcase priority, from most (`Z`) to least (`C`) important
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Z,
    A,
    B,
    C,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Z, Priority::A, Priority::B, Priority::C];

    pub const DEFAULT: Priority = Priority::B;

    /// Numeric rank used by mind-map documents
    pub fn rank(&self) -> i64 {
        match self {
            Priority::Z => 1,
            Priority::A => 2,
            Priority::B => 3,
            Priority::C => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Priority::Z => "Z",
            Priority::A => "A",
            Priority::B => "B",
            Priority::C => "C",
        }
    }

    pub fn from_rank(rank: i64) -> Option<Priority> {
        Self::ALL.into_iter().find(|p| p.rank() == rank)
    }

    /// Name for a raw rank, falling back to the default priority's name
    pub fn name_for_rank(rank: i64) -> &'static str {
        Self::from_rank(rank).unwrap_or(Self::DEFAULT).name()
    }

    /// Dropdown domain, in table order
    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|p| p.name().to_string()).collect()
    }
}

/// Execution result of a testcase
///
/// Codes 0 to 3 come from the mind-map markers; `Skipped` (code 4) only
/// appears in documents produced by the statistics tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestResult {
    NonExecution,
    Pass,
    Failed,
    Blocked,
    Skipped,
}

impl TestResult {
    pub const ALL: [TestResult; 5] = [
        TestResult::NonExecution,
        TestResult::Pass,
        TestResult::Failed,
        TestResult::Blocked,
        TestResult::Skipped,
    ];

    pub const DEFAULT: TestResult = TestResult::NonExecution;

    pub fn code(&self) -> i64 {
        match self {
            TestResult::NonExecution => 0,
            TestResult::Pass => 1,
            TestResult::Failed => 2,
            TestResult::Blocked => 3,
            TestResult::Skipped => 4,
        }
    }

    /// Display text written to artifacts
    pub fn text(&self) -> &'static str {
        match self {
            TestResult::NonExecution => "not run",
            TestResult::Pass => "PASS",
            TestResult::Failed => "NG",
            TestResult::Blocked => "blocked",
            TestResult::Skipped => "skipped",
        }
    }

    pub fn from_code(code: i64) -> Option<TestResult> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }

    /// Display text for a raw code, falling back to the default result's text
    pub fn text_for_code(code: i64) -> &'static str {
        Self::from_code(code).unwrap_or(Self::DEFAULT).text()
    }

    /// Dropdown domain, in table order
    pub fn texts() -> Vec<String> {
        Self::ALL.iter().map(|r| r.text().to_string()).collect()
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
