//! Plain-text descriptions of test cases and suites.

use crate::model::{TestCase, TestSuite};

/// Describe a test case, one predicate per line joined by `AND`.
pub fn format_test_case(test_case: &TestCase) -> String {
    let mut out = format!(
        "Test Case Name: {}\nURL: {}\nExpected Status Code: {}\nCriteria:\n",
        test_case.name, test_case.url_pattern, test_case.expected_status_code
    );

    let criteria: Vec<String> = test_case
        .predicates
        .iter()
        .map(|p| format!("\t{} == {}", p.attribute, p.expected_value))
        .collect();
    if !criteria.is_empty() {
        out.push_str(&criteria.join(" AND\n"));
        out.push('\n');
    }

    out
}

/// Describe a suite: its name, then every test case followed by a blank line.
pub fn format_test_suite(suite: &TestSuite) -> String {
    let mut out = format!("Test Suite Name: {}\n\n", suite.name);
    for test_case in &suite.test_cases {
        out.push_str(&format_test_case(test_case));
        out.push('\n');
    }
    out
}
