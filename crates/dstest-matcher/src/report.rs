//! Human- and machine-readable reports over a matched test run.

use crate::model::{TestRun, TestRunStatus, TestStatus};
use serde::Serialize;
use std::fmt;

/// Outcome of one test case as shown in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseOutcome {
    Success,
    Failure,
    NoTransactionFound,
}

impl CaseOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            CaseOutcome::Success => "success",
            CaseOutcome::Failure => "failure",
            CaseOutcome::NoTransactionFound => "no transaction found",
        }
    }
}

impl From<TestStatus> for CaseOutcome {
    fn from(status: TestStatus) -> Self {
        match status {
            TestStatus::Success => CaseOutcome::Success,
            TestStatus::Failure => CaseOutcome::Failure,
        }
    }
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub test_case_id: String,
    pub name: String,
    pub outcome: CaseOutcome,
    /// Transaction that decided the outcome, when one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Summary of a run: every suite case in order plus aggregate counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub run_id: String,
    pub run_name: String,
    pub status: TestRunStatus,
    pub attempted: usize,
    pub succeeded: usize,
    pub total: usize,
    pub cases: Vec<CaseReport>,
}

impl RunReport {
    pub fn from_run(run: &TestRun) -> Self {
        let cases: Vec<CaseReport> = run
            .suite
            .test_cases
            .iter()
            .map(|case| {
                let result = run.result_for_case(case);
                CaseReport {
                    test_case_id: case.id.clone(),
                    name: case.name.clone(),
                    outcome: result
                        .map(|r| r.status.into())
                        .unwrap_or(CaseOutcome::NoTransactionFound),
                    transaction_id: result.map(|r| r.transaction.id.clone()),
                }
            })
            .collect();

        let attempted = cases
            .iter()
            .filter(|c| c.outcome != CaseOutcome::NoTransactionFound)
            .count();
        let succeeded = cases
            .iter()
            .filter(|c| c.outcome == CaseOutcome::Success)
            .count();

        Self {
            run_id: run.id.clone(),
            run_name: run.name.clone(),
            status: run.status,
            attempted,
            succeeded,
            total: cases.len(),
            cases,
        }
    }

    /// Complete run with every case successful.
    pub fn all_passed(&self) -> bool {
        self.status == TestRunStatus::Complete && self.succeeded == self.total
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report for Test Run> {}", self.run_name)?;
        for case in &self.cases {
            writeln!(
                f,
                "\tResult for Test Case `{}`: {}",
                case.name,
                case.outcome.label()
            )?;
        }
        writeln!(
            f,
            "\tNumber of tests attempted: {} of total {}",
            self.attempted, self.total
        )?;
        writeln!(
            f,
            "\tNumber of tests successfully completed: {} of total {}",
            self.succeeded, self.total
        )?;
        writeln!(f, "\tStatus of test run: {}", self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TestCase, TestResult, TestSuite, Transaction};

    fn sample_run() -> TestRun {
        let suite = TestSuite::new("s1", "TestSuite1")
            .with_case(TestCase::new("c1", "TestCase1", "/a", 201))
            .with_case(TestCase::new("c2", "TestCase2", "/b", 500))
            .with_case(TestCase::new("c3", "TestCase3", "/c", 201));
        let mut run = TestRun::new("r1", "Tom Run 1", "h1", suite.clone());
        run.results.push(TestResult::new(
            suite.test_cases[0].clone(),
            Transaction::new("t1", "/a", 201),
            TestStatus::Success,
        ));
        run.results.push(TestResult::new(
            suite.test_cases[1].clone(),
            Transaction::new("t2", "/b", 201),
            TestStatus::Failure,
        ));
        run.status = TestRunStatus::InProgress;
        run
    }

    #[test]
    fn test_report_counts_and_outcomes() {
        let report = RunReport::from_run(&sample_run());
        assert_eq!(report.total, 3);
        assert_eq!(report.attempted, 2);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.cases[0].outcome, CaseOutcome::Success);
        assert_eq!(report.cases[1].outcome, CaseOutcome::Failure);
        assert_eq!(report.cases[2].outcome, CaseOutcome::NoTransactionFound);
        assert_eq!(report.cases[1].transaction_id.as_deref(), Some("t2"));
        assert!(report.cases[2].transaction_id.is_none());
        assert!(!report.all_passed());
    }

    #[test]
    fn test_report_text() {
        let text = RunReport::from_run(&sample_run()).to_string();
        let expected = "Report for Test Run> Tom Run 1\n\
            \tResult for Test Case `TestCase1`: success\n\
            \tResult for Test Case `TestCase2`: failure\n\
            \tResult for Test Case `TestCase3`: no transaction found\n\
            \tNumber of tests attempted: 2 of total 3\n\
            \tNumber of tests successfully completed: 1 of total 3\n\
            \tStatus of test run: in progress\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_report_json() {
        let value = serde_json::to_value(RunReport::from_run(&sample_run())).unwrap();
        assert_eq!(value["cases"][2]["outcome"], "no_transaction_found");
        assert_eq!(value["status"], 2);
        assert!(value["cases"][2].get("transaction_id").is_none());
    }
}
