//! Sources and sinks for test runs, suites and transactions.
//!
//! The matcher never performs I/O itself; these traits are the seams through
//! which the collector obtains its inputs and hands back results. Handles are
//! passed in explicitly, never held in globals.
//!
//! # Module Structure
//!
//! - `api` - configuration API client (runs and suites over HTTP)
//! - `file` - JSON file backed transaction pool and run store
//! - `memory` - in-memory store for tests and embedding

mod api;
mod file;
mod memory;

pub use api::ConfigApiClient;
pub use file::{FileTestRunStore, FileTransactionStore};
pub use memory::InMemoryStore;

use crate::error::StoreError;
use async_trait::async_trait;
use dstest_matcher::{TestRun, TestSuite, Transaction};
use std::sync::Arc;

/// Supplies fully hydrated test runs by id.
#[async_trait]
pub trait TestRunSource: Send + Sync {
    async fn fetch_test_run(&self, run_id: &str) -> Result<TestRun, StoreError>;
}

/// Supplies test suites by id.
#[async_trait]
pub trait TestSuiteSource: Send + Sync {
    async fn fetch_test_suite(&self, suite_id: &str) -> Result<TestSuite, StoreError>;
}

/// Supplies the transaction pool of a run.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Transactions whose correlation id equals `run.run_header_id`, most
    /// recent first.
    async fn transactions_for_run(&self, run: &TestRun) -> Result<Vec<Transaction>, StoreError>;
}

/// Persists a matched test run, replacing any stored copy.
#[async_trait]
pub trait TestRunSink: Send + Sync {
    async fn persist_test_run(&self, run: &TestRun) -> Result<(), StoreError>;
}

#[async_trait]
impl<S: TestRunSource + ?Sized> TestRunSource for Arc<S> {
    async fn fetch_test_run(&self, run_id: &str) -> Result<TestRun, StoreError> {
        (**self).fetch_test_run(run_id).await
    }
}

#[async_trait]
impl<S: TransactionSource + ?Sized> TransactionSource for Arc<S> {
    async fn transactions_for_run(&self, run: &TestRun) -> Result<Vec<Transaction>, StoreError> {
        (**self).transactions_for_run(run).await
    }
}

#[async_trait]
impl<S: TestRunSink + ?Sized> TestRunSink for Arc<S> {
    async fn persist_test_run(&self, run: &TestRun) -> Result<(), StoreError> {
        (**self).persist_test_run(run).await
    }
}

/// Keep the transactions of `run_header_id` and order them most recent first.
///
/// `transactions` is in capture order. Ties on timestamp go to the later
/// capture.
pub(crate) fn pool_for_run<'a, I>(transactions: I, run_header_id: &str) -> Vec<Transaction>
where
    I: DoubleEndedIterator<Item = &'a Transaction>,
{
    let mut pool: Vec<Transaction> = transactions
        .rev()
        .filter(|tx| tx.run_header_id == run_header_id)
        .cloned()
        .collect();
    pool.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    pool
}

/// Copy of `run` as it should be stored: status derived from result count.
pub(crate) fn persisted_copy(run: &TestRun) -> TestRun {
    let mut stored = run.clone();
    stored.status = run.completion_status();
    stored
}
