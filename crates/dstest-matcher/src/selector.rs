//! Candidate selection: pick the transaction that answers one test case.
//!
//! Transactions are scanned in the order given, which callers supply
//! most-recent-first. The first transaction whose URL satisfies the case's
//! pattern and whose request body satisfies every predicate is selected and
//! the scan stops there. The selected transaction is then classified by its
//! status code alone: a candidate with the wrong status code is a `Failure`,
//! not a reason to keep scanning for an older transaction with the right one.

use crate::model::{TestCase, TestStatus, Transaction};
use crate::path_matcher::CompiledUrlPattern;
use crate::predicate::predicates_match;

/// The transaction chosen for a test case and its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'a> {
    pub transaction: &'a Transaction,
    pub status: TestStatus,
}

/// A test case prepared for repeated selection (URL pattern compiled once).
#[derive(Debug, Clone)]
pub struct CompiledTestCase<'c> {
    test_case: &'c TestCase,
    url: CompiledUrlPattern,
}

impl<'c> CompiledTestCase<'c> {
    pub fn compile(test_case: &'c TestCase) -> Self {
        Self {
            test_case,
            url: CompiledUrlPattern::compile(&test_case.url_pattern),
        }
    }

    pub fn test_case(&self) -> &'c TestCase {
        self.test_case
    }

    /// URL and predicates both hold; the status code is not considered.
    pub fn is_candidate(&self, transaction: &Transaction) -> bool {
        self.url.matches(&transaction.url)
            && predicates_match(&transaction.request, &self.test_case.predicates)
    }

    /// First candidate in `transactions`, classified against the expected
    /// status code. `None` means no candidate has been observed yet.
    pub fn select<'t>(&self, transactions: &'t [Transaction]) -> Option<Selection<'t>> {
        transactions
            .iter()
            .find(|tx| self.is_candidate(tx))
            .map(|tx| Selection {
                transaction: tx,
                status: TestStatus::classify(tx.status, self.test_case.expected_status_code),
            })
    }
}

/// Select the transaction for `test_case` from a most-recent-first pool.
pub fn select<'t>(test_case: &TestCase, transactions: &'t [Transaction]) -> Option<Selection<'t>> {
    CompiledTestCase::compile(test_case).select(transactions)
}
