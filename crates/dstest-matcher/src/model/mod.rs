//! Data model shared by the matcher and its collaborators.
//!
//! Field names follow the JSON documents served by the configuration API, so
//! the same types round-trip through HTTP, files and the matcher.

mod run;
mod suite;
mod transaction;

pub use run::{TestResult, TestRun, TestRunStatus, TestStatus};
pub use suite::{Predicate, TestCase, TestSuite};
pub use transaction::Transaction;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
