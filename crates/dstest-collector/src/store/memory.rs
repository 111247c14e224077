//! In-memory store for tests and embedding.

use super::{
    persisted_copy, pool_for_run, TestRunSink, TestRunSource, TestSuiteSource, TransactionSource,
};
use crate::error::StoreError;
use async_trait::async_trait;
use dstest_matcher::{TestRun, TestSuite, Transaction};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory implementation of every store trait
///
/// Transactions are kept in capture order and served with the same
/// most-recent-first ordering as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    runs: RwLock<HashMap<String, TestRun>>,
    suites: RwLock<HashMap<String, TestSuite>>,
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_run(&self, run: TestRun) {
        self.runs.write().insert(run.id.clone(), run);
    }

    pub fn insert_suite(&self, suite: TestSuite) {
        self.suites.write().insert(suite.id.clone(), suite);
    }

    /// Record a transaction as the most recent capture.
    pub fn record(&self, transaction: Transaction) {
        self.transactions.write().push(transaction);
    }

    /// Stored copy of a run, if any.
    pub fn run(&self, run_id: &str) -> Option<TestRun> {
        self.runs.read().get(run_id).cloned()
    }
}

#[async_trait]
impl TestRunSource for InMemoryStore {
    async fn fetch_test_run(&self, run_id: &str) -> Result<TestRun, StoreError> {
        self.run(run_id)
            .ok_or_else(|| StoreError::NotFound(format!("test run {run_id}")))
    }
}

#[async_trait]
impl TestSuiteSource for InMemoryStore {
    async fn fetch_test_suite(&self, suite_id: &str) -> Result<TestSuite, StoreError> {
        self.suites
            .read()
            .get(suite_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("test suite {suite_id}")))
    }
}

#[async_trait]
impl TransactionSource for InMemoryStore {
    async fn transactions_for_run(&self, run: &TestRun) -> Result<Vec<Transaction>, StoreError> {
        Ok(pool_for_run(
            self.transactions.read().iter(),
            &run.run_header_id,
        ))
    }
}

#[async_trait]
impl TestRunSink for InMemoryStore {
    async fn persist_test_run(&self, run: &TestRun) -> Result<(), StoreError> {
        self.insert_run(persisted_copy(run));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dstest_matcher::{TestCase, TestRunStatus};

    #[tokio::test]
    async fn test_run_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(
            store.fetch_test_run("missing").await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_persist_replaces_and_derives_status() {
        let store = InMemoryStore::new();
        let suite = TestSuite::new("s1", "suite").with_case(TestCase::new("c1", "one", "/a", 200));
        let mut run = TestRun::new("r1", "run", "h1", suite.clone());
        store.insert_run(run.clone());
        store.insert_suite(suite);

        run.status = TestRunStatus::Complete;
        store.persist_test_run(&run).await.unwrap();

        let stored = store.fetch_test_run("r1").await.unwrap();
        assert_eq!(stored.status, TestRunStatus::InProgress);
        assert_eq!(store.fetch_test_suite("s1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_transactions_filtered_by_run_header() {
        let store = InMemoryStore::new();
        store.record(Transaction::new("t1", "/a", 200).with_run_header_id("h1"));
        store.record(Transaction::new("t2", "/a", 200).with_run_header_id("other"));

        let run = TestRun::new("r1", "run", "h1", TestSuite::default());
        let pool = store.transactions_for_run(&run).await.unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].id, "t1");
    }
}
