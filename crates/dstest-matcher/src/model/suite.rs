//! Test suite definitions: predicates, test cases and suites.

use serde::{Deserialize, Serialize};

/// A required value at a dotted JSON path inside a transaction's request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Dotted path, e.g. `amount.total`.
    pub attribute: String,
    pub expected_value: String,
}

impl Predicate {
    pub fn new(attribute: impl Into<String>, expected_value: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            attribute: attribute.into(),
            expected_value: expected_value.into(),
        }
    }
}

/// One expected behavior: a URL pattern, a set of predicates that must all
/// hold, and the status code the service should have answered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Literal path or template such as `/users/:id/orders`.
    #[serde(rename = "url")]
    pub url_pattern: String,
    #[serde(default)]
    pub predicates: Vec<Predicate>,
    #[serde(rename = "expected_status")]
    pub expected_status_code: u16,
}

impl TestCase {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url_pattern: impl Into<String>,
        expected_status_code: u16,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url_pattern: url_pattern.into(),
            predicates: Vec::new(),
            expected_status_code,
        }
    }

    pub fn with_predicate(
        mut self,
        attribute: impl Into<String>,
        expected_value: impl Into<String>,
    ) -> Self {
        self.predicates.push(Predicate::new(attribute, expected_value));
        self
    }
}

/// An ordered collection of test cases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            test_cases: Vec::new(),
        }
    }

    pub fn with_case(mut self, test_case: TestCase) -> Self {
        self.test_cases.push(test_case);
        self
    }

    pub fn len(&self) -> usize {
        self.test_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
    }
}
