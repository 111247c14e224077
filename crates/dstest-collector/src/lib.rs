//! Test run collection for DSTest.
//!
//! Fetches a test run definition and the transactions recorded under its
//! correlation id, hands both to the matcher, and persists the verdicts. The
//! stores are injected as trait objects or generics so the same flow runs
//! against the configuration API, local JSON files, or memory.
//!
//! # Example
//!
//! ```no_run
//! use dstest_collector::{Collector, FileTestRunStore, FileTransactionStore};
//! use dstest_matcher::RunReport;
//!
//! # async fn run() -> Result<(), dstest_collector::CollectError> {
//! let collector = Collector::new(
//!     FileTestRunStore::new("testruns"),
//!     FileTransactionStore::new("transactions.json"),
//!     FileTestRunStore::new("testruns"),
//! );
//! let run = collector.collect("62828e4072277df7cd3a4254").await?;
//! println!("{}", RunReport::from_run(&run));
//! # Ok(())
//! # }
//! ```

mod collector;
mod config;
mod error;
pub mod store;

pub use collector::Collector;
pub use config::CollectorConfig;
pub use error::{CollectError, StoreError};
pub use store::{
    ConfigApiClient, FileTestRunStore, FileTransactionStore, InMemoryStore, TestRunSink,
    TestRunSource, TestSuiteSource, TransactionSource,
};
