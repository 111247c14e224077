//! Error types for fetching, persisting and collecting test runs.

use thiserror::Error;

/// Failures of the stores that supply and persist runs and transactions.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },
    #[error("Failed to parse response from {url}: {message}")]
    Parse { url: String, message: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid base URL {url}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("{0} not found")]
    NotFound(String),
}

/// Failures of one collection attempt. Every variant aborts the attempt.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Failed to fetch test run {run_id}")]
    FetchRun {
        run_id: String,
        #[source]
        source: StoreError,
    },
    #[error("Failed to fetch transactions for test run {run_id}")]
    FetchTransactions {
        run_id: String,
        #[source]
        source: StoreError,
    },
    #[error("Failed to persist test run {run_id}")]
    Persist {
        run_id: String,
        #[source]
        source: StoreError,
    },
}
