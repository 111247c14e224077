//! Matching engine for record-and-replay integration testing.
//!
//! Recorded HTTP transactions are correlated against the declarative test
//! cases of a test run. Each test case gets at most one transaction: the most
//! recent one whose URL satisfies the case's pattern and whose request body
//! satisfies every predicate. That transaction is classified `Success` or
//! `Failure` by its status code, and the run becomes `Complete` once every
//! case has a result.
//!
//! The engine performs no I/O. Fetching runs and transactions and persisting
//! results belong to the caller.
//!
//! # Example
//!
//! ```
//! use dstest_matcher::{match_run, RunReport, TestCase, TestRun, TestRunStatus, TestSuite, Transaction};
//!
//! let suite = TestSuite::new("s1", "payments").with_case(
//!     TestCase::new("c1", "charge", "/ch/payments/v1/charges", 201)
//!         .with_predicate("amount.total", "300"),
//! );
//! let mut run = TestRun::new("r1", "nightly", "1234567890123456", suite);
//!
//! // Pool ordered most-recent-first.
//! let pool = vec![Transaction::new("t1", "/ch/payments/v1/charges", 201)
//!     .with_request(r#"{"amount":{"total":300}}"#)];
//!
//! match_run(&mut run, &pool);
//! assert_eq!(run.status, TestRunStatus::Complete);
//! println!("{}", RunReport::from_run(&run));
//! ```

pub mod format;
pub mod model;
pub mod path_matcher;
pub mod predicate;
pub mod report;
pub mod run_matcher;
pub mod selector;

pub use format::{format_test_case, format_test_suite};
pub use model::{
    Predicate, TestCase, TestResult, TestRun, TestRunStatus, TestStatus, TestSuite, Transaction,
};
pub use path_matcher::{url_matches, CompiledUrlPattern};
pub use report::{CaseOutcome, CaseReport, RunReport};
pub use run_matcher::{match_run, MatchSummary};
pub use selector::{select, CompiledTestCase, Selection};
