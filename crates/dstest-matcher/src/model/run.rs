//! Test runs, their status and the per-case results the matcher records.

use super::null_as_default;
use super::suite::{TestCase, TestSuite};
use super::transaction::Transaction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a test run.
///
/// Serialized as its integer discriminant. The matcher only ever writes
/// `InProgress` or `Complete`; the earlier states belong to whoever created
/// the run.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum TestRunStatus {
    #[default]
    Undefined = 0,
    Created = 1,
    InProgress = 2,
    Complete = 3,
}

impl TestRunStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TestRunStatus::Undefined => "undefined",
            TestRunStatus::Created => "created",
            TestRunStatus::InProgress => "in progress",
            TestRunStatus::Complete => "complete",
        }
    }
}

impl From<TestRunStatus> for u8 {
    fn from(status: TestRunStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for TestRunStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TestRunStatus::Undefined),
            1 => Ok(TestRunStatus::Created),
            2 => Ok(TestRunStatus::InProgress),
            3 => Ok(TestRunStatus::Complete),
            other => Err(format!("invalid test run status {other}")),
        }
    }
}

impl fmt::Display for TestRunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of a selected transaction against its test case.
///
/// There is no undefined variant: a case without a candidate transaction has
/// no `TestResult` at all, so an unresolved status can never be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TestStatus {
    Success = 1,
    Failure = 2,
}

impl TestStatus {
    /// Classify an observed status code against the expected one.
    pub fn classify(observed: u16, expected: u16) -> Self {
        if observed == expected {
            TestStatus::Success
        } else {
            TestStatus::Failure
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Success => "success",
            TestStatus::Failure => "failure",
        }
    }
}

impl From<TestStatus> for u8 {
    fn from(status: TestStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for TestStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TestStatus::Success),
            2 => Ok(TestStatus::Failure),
            0 => Err("undefined test status cannot be stored in a result".to_string()),
            other => Err(format!("invalid test status {other}")),
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The outcome recorded for one test case that found a candidate transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub test_case: TestCase,
    pub transaction: Transaction,
    pub status: TestStatus,
    pub timestamp: DateTime<Utc>,
}

impl TestResult {
    /// Create a result with a fresh id, stamped now.
    pub fn new(test_case: TestCase, transaction: Transaction, status: TestStatus) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            test_case,
            transaction,
            status,
            timestamp: Utc::now(),
        }
    }
}

/// One execution of a suite against the traffic tagged with `run_header_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRun {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "apikey", default)]
    pub api_key: String,
    /// Correlation key used to fetch the transaction pool.
    #[serde(rename = "header_id", default)]
    pub run_header_id: String,
    #[serde(rename = "test_suite", default, deserialize_with = "null_as_default")]
    pub suite: TestSuite,
    #[serde(rename = "test_results", default, deserialize_with = "null_as_default")]
    pub results: Vec<TestResult>,
    #[serde(default)]
    pub status: TestRunStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl TestRun {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        run_header_id: impl Into<String>,
        suite: TestSuite,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            api_key: String::new(),
            run_header_id: run_header_id.into(),
            suite,
            results: Vec::new(),
            status: TestRunStatus::Created,
            timestamp: Some(Utc::now()),
        }
    }

    /// The result recorded for the test case with `case_id`, if any.
    pub fn result_for(&self, case_id: &str) -> Option<&TestResult> {
        self.results.iter().find(|r| r.test_case.id == case_id)
    }

    /// The result recorded for `test_case`.
    ///
    /// Cases are looked up by id; a case stored without an id is looked up by
    /// its whole definition instead.
    pub fn result_for_case(&self, test_case: &TestCase) -> Option<&TestResult> {
        if test_case.id.is_empty() {
            self.results.iter().find(|r| r.test_case == *test_case)
        } else {
            self.result_for(&test_case.id)
        }
    }

    /// Status implied by the current result count: complete only when every
    /// case in the suite has a result.
    pub fn completion_status(&self) -> TestRunStatus {
        if self.results.len() == self.suite.len() {
            TestRunStatus::Complete
        } else {
            TestRunStatus::InProgress
        }
    }
}
