//! Run matching: resolve every test case of a run against its transaction pool.

use crate::model::{TestResult, TestRun, TestRunStatus, TestStatus, Transaction};
use crate::selector::CompiledTestCase;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Counts produced by one `match_run` pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub total: usize,
    pub resolved: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Ids of test cases with no candidate transaction, in suite order.
    pub unresolved: Vec<String>,
}

impl MatchSummary {
    pub fn is_complete(&self) -> bool {
        self.resolved == self.total
    }
}

/// Match every test case in `run.suite` against `transactions`.
///
/// `transactions` must already be ordered most-recent-first. Results from any
/// earlier pass are discarded first, so the run ends up with at most one
/// result per test case. The run is `Complete` only when every case produced
/// a result, whatever its classification; otherwise it is `InProgress`.
pub fn match_run(run: &mut TestRun, transactions: &[Transaction]) -> MatchSummary {
    if !run.results.is_empty() {
        debug!(
            "Discarding {} previous results of test run {}",
            run.results.len(),
            run.id
        );
        run.results.clear();
    }

    let mut summary = MatchSummary {
        total: run.suite.len(),
        ..Default::default()
    };
    let mut status = TestRunStatus::Complete;
    let mut seen = HashSet::new();
    let mut results = Vec::with_capacity(run.suite.len());

    for test_case in &run.suite.test_cases {
        // Cases stored without an id cannot collide; each is matched.
        if !test_case.id.is_empty() && !seen.insert(test_case.id.as_str()) {
            warn!(
                "Test case id {:?} appears more than once in suite {}; skipping `{}`",
                test_case.id, run.suite.name, test_case.name
            );
            status = TestRunStatus::InProgress;
            continue;
        }

        debug!("Searching for transactions to match test case `{}`", test_case.name);
        match CompiledTestCase::compile(test_case).select(transactions) {
            Some(selection) => {
                debug!(
                    "Test case `{}` matched transaction {} ({})",
                    test_case.name, selection.transaction.id, selection.status
                );
                match selection.status {
                    TestStatus::Success => summary.succeeded += 1,
                    TestStatus::Failure => summary.failed += 1,
                }
                summary.resolved += 1;
                results.push(TestResult::new(
                    test_case.clone(),
                    selection.transaction.clone(),
                    selection.status,
                ));
            }
            None => {
                debug!("No transaction found for test case `{}`", test_case.name);
                summary.unresolved.push(test_case.id.clone());
                status = TestRunStatus::InProgress;
            }
        }
    }

    run.results = results;
    run.status = status;

    info!(
        "Matched test run {}: {}/{} resolved, {} succeeded, status {}",
        run.id, summary.resolved, summary.total, summary.succeeded, run.status
    );

    summary
}
