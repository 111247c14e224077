//! Collection of a test run: fetch, match, persist.

use crate::error::CollectError;
use crate::store::{TestRunSink, TestRunSource, TransactionSource};
use dstest_matcher::{match_run, TestRun};
use tracing::info;

/// Drives one collection attempt over injected sources and sink.
pub struct Collector<R, T, S> {
    runs: R,
    transactions: T,
    sink: S,
    persist: bool,
}

impl<R, T, S> Collector<R, T, S>
where
    R: TestRunSource,
    T: TransactionSource,
    S: TestRunSink,
{
    pub fn new(runs: R, transactions: T, sink: S) -> Self {
        Self {
            runs,
            transactions,
            sink,
            persist: true,
        }
    }

    /// Skip persisting the matched run.
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Fetch run `run_id` and its transaction pool, match, then persist.
    ///
    /// Any fetch or persist failure aborts the attempt and no run is returned.
    pub async fn collect(&self, run_id: &str) -> Result<TestRun, CollectError> {
        let mut run = self
            .runs
            .fetch_test_run(run_id)
            .await
            .map_err(|source| CollectError::FetchRun {
                run_id: run_id.to_string(),
                source,
            })?;
        info!(
            "Collecting test run {} `{}` ({} test cases, run header {})",
            run.id,
            run.name,
            run.suite.len(),
            run.run_header_id
        );

        let transactions = self
            .transactions
            .transactions_for_run(&run)
            .await
            .map_err(|source| CollectError::FetchTransactions {
                run_id: run_id.to_string(),
                source,
            })?;

        match_run(&mut run, &transactions);

        if self.persist {
            self.sink
                .persist_test_run(&run)
                .await
                .map_err(|source| CollectError::Persist {
                    run_id: run_id.to_string(),
                    source,
                })?;
        }

        Ok(run)
    }
}
