//! JSON file backed stores.

use super::{persisted_copy, pool_for_run, TestRunSink, TestRunSource, TransactionSource};
use crate::error::StoreError;
use async_trait::async_trait;
use dstest_matcher::{TestRun, Transaction};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Transaction pool read from a JSON array of transactions in capture order.
pub struct FileTransactionStore {
    path: PathBuf,
}

impl FileTransactionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every recorded transaction, in capture order. A missing file is empty.
    pub async fn load_all(&self) -> Result<Vec<Transaction>, StoreError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Transaction file {:?} does not exist, pool is empty", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&json)?)
    }
}

#[async_trait]
impl TransactionSource for FileTransactionStore {
    async fn transactions_for_run(&self, run: &TestRun) -> Result<Vec<Transaction>, StoreError> {
        let all = self.load_all().await?;
        let pool = pool_for_run(all.iter(), &run.run_header_id);
        info!(
            "Loaded {} of {} transactions for run header {} from {:?}",
            pool.len(),
            all.len(),
            run.run_header_id,
            self.path
        );
        Ok(pool)
    }
}

/// Test runs stored one JSON document per run under a directory.
pub struct FileTestRunStore {
    dir: PathBuf,
}

impl FileTestRunStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn run_path(&self, run_id: &str) -> Result<PathBuf, StoreError> {
        if run_id.is_empty() || run_id.contains(['/', '\\']) || run_id.starts_with('.') {
            return Err(StoreError::NotFound(format!("test run {run_id:?}")));
        }
        Ok(self.dir.join(format!("{run_id}.json")))
    }
}

#[async_trait]
impl TestRunSource for FileTestRunStore {
    async fn fetch_test_run(&self, run_id: &str) -> Result<TestRun, StoreError> {
        let path = self.run_path(run_id)?;
        let json = match fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(format!("test run {run_id}")));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&json)?)
    }
}

#[async_trait]
impl TestRunSink for FileTestRunStore {
    async fn persist_test_run(&self, run: &TestRun) -> Result<(), StoreError> {
        let path = self.run_path(&run.id)?;
        let json = serde_json::to_string_pretty(&persisted_copy(run))?;

        fs::create_dir_all(&self.dir).await?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &path).await?;

        info!("Saved test run {} to {:?}", run.id, path);
        Ok(())
    }
}
