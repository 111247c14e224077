//! Normalized string comparison of request body attributes.

use super::json_path::{parse_body, resolve};
use crate::model::Predicate;
use serde_json::value::RawValue;

/// Check whether the value at `attribute_path` in `request_body` equals
/// `expected_value`.
///
/// The resolved value's text, exactly as written in the body, has one layer of surrounding
/// double quotes removed and is compared case-insensitively, so `300`,
/// `"300"` and `true`/`"True"` compare as plain text. A body that is not JSON
/// or a path that resolves to nothing never matches.
pub fn matches(request_body: &str, attribute_path: &str, expected_value: &str) -> bool {
    match parse_body(request_body) {
        Some(root) => matches_value(root, attribute_path, expected_value),
        None => false,
    }
}

/// Check every predicate against one request body (logical AND).
///
/// The body is parsed once. An empty predicate list is vacuously true, even
/// for a body that is not JSON.
pub fn predicates_match(request_body: &str, predicates: &[Predicate]) -> bool {
    if predicates.is_empty() {
        return true;
    }

    let Some(root) = parse_body(request_body) else {
        return false;
    };

    predicates
        .iter()
        .all(|p| matches_value(root, &p.attribute, &p.expected_value))
}

fn matches_value(root: &RawValue, attribute_path: &str, expected_value: &str) -> bool {
    let Some(resolved) = resolve(root, attribute_path) else {
        return false;
    };

    let raw = resolved.raw();
    strip_quotes(&raw).to_lowercase() == expected_value.to_lowercase()
}

fn strip_quotes(raw: &str) -> &str {
    let raw = raw.strip_prefix('"').unwrap_or(raw);
    raw.strip_suffix('"').unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHARGE: &str = r#"{
        "amount": {"total": 300, "currency": "USD"},
        "source": {"sourceType": "PaymentTrack"},
        "transactionDetails": {"captureFlag": true}
    }"#;

    #[test]
    fn test_number_matches_text() {
        assert!(matches(CHARGE, "amount.total", "300"));
        assert!(!matches(CHARGE, "amount.total", "200"));
    }

    #[test]
    fn test_string_is_unquoted_and_case_insensitive() {
        assert!(matches(CHARGE, "source.sourceType", "PaymentTrack"));
        assert!(matches(CHARGE, "source.sourceType", "paymenttrack"));
        assert!(matches(CHARGE, "source.sourceType", "PAYMENTTRACK"));
        assert!(!matches(CHARGE, "source.sourceType", "\"PaymentTrack\""));
    }

    #[test]
    fn test_boolean_compares_textually() {
        assert!(matches(CHARGE, "transactionDetails.captureFlag", "True"));
        assert!(matches(CHARGE, "transactionDetails.captureFlag", "true"));
        assert!(!matches(CHARGE, "transactionDetails.captureFlag", "1"));
    }

    #[test]
    fn test_quoted_number_matches_bare_expectation() {
        let body = r#"{"amount":{"total":"300"}}"#;
        assert!(matches(body, "amount.total", "300"));
        assert!(!matches(body, "amount.total", "TOTAL-LOOKALIKE"));
    }

    #[test]
    fn test_decimal_text_is_compared_as_written() {
        let body = r#"{"amount":{"total":12.50,"tax":300.00},"rate":1e2}"#;
        assert!(matches(body, "amount.total", "12.50"));
        assert!(!matches(body, "amount.total", "12.5"));
        assert!(matches(body, "amount.tax", "300.00"));
        assert!(matches(body, "rate", "1e2"));
        assert!(matches(body, "rate", "1E2"));
    }

    #[test]
    fn test_object_value_keeps_its_spacing() {
        let body = r#"{"a":{"b": 1}}"#;
        assert!(matches(body, "a", r#"{"b": 1}"#));
        assert!(!matches(body, "a", r#"{"b":1}"#));
    }

    #[test]
    fn test_missing_path_never_matches() {
        assert!(!matches(CHARGE, "source.missing", ""));
        assert!(!matches(CHARGE, "nope", "300"));
    }

    #[test]
    fn test_malformed_body_never_matches() {
        assert!(!matches("{not json", "amount.total", "300"));
        assert!(!matches("", "amount.total", "300"));
    }

    #[test]
    fn test_empty_string_value() {
        let body = r#"{"note": ""}"#;
        assert!(matches(body, "note", ""));
    }

    #[test]
    fn test_predicates_match_is_conjunction() {
        let both = vec![
            Predicate::new("amount.total", "300"),
            Predicate::new("source.sourceType", "PaymentTrack"),
        ];
        assert!(predicates_match(CHARGE, &both));

        let one_wrong = vec![
            Predicate::new("amount.total", "300"),
            Predicate::new("source.sourceType", "Token"),
        ];
        assert!(!predicates_match(CHARGE, &one_wrong));
    }

    #[test]
    fn test_no_predicates_is_vacuously_true() {
        assert!(predicates_match(CHARGE, &[]));
        assert!(predicates_match("not json", &[]));
        assert!(!predicates_match("not json", &[Predicate::new("a", "b")]));
    }
}
