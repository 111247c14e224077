//! End-to-end matching scenarios over the payments sample suite.

use dstest_matcher::{
    match_run, url_matches, CaseOutcome, RunReport, TestCase, TestRun, TestRunStatus, TestStatus,
    TestSuite, Transaction,
};

const CHARGES: &str = "/ch/payments/v1/charges";

fn payments_run() -> TestRun {
    let suite = TestSuite::new("627a8285b1c63cf751cfc1fd", "TestSuite1").with_case(
        TestCase::new("c1", "TestCase1", CHARGES, 201)
            .with_predicate("amount.total", "300")
            .with_predicate("source.sourceType", "PaymentTrack"),
    );
    TestRun::new("62828e4072277df7cd3a4254", "Tom Run 1", "1234567890123456", suite)
}

fn charge(status: u16, body: &str) -> Transaction {
    Transaction::new("tx-1", CHARGES, status)
        .with_run_header_id("1234567890123456")
        .with_request(body)
}

#[test]
fn matching_charge_succeeds() {
    let mut run = payments_run();
    let pool = vec![charge(
        201,
        r#"{"amount":{"total":300},"source":{"sourceType":"PaymentTrack"}}"#,
    )];

    match_run(&mut run, &pool);

    assert_eq!(run.results.len(), 1);
    assert_eq!(run.results[0].status, TestStatus::Success);
    assert_eq!(run.status, TestRunStatus::Complete);
}

#[test]
fn matching_charge_with_server_error_fails() {
    let mut run = payments_run();
    let pool = vec![charge(
        500,
        r#"{"amount":{"total":300},"source":{"sourceType":"PaymentTrack"}}"#,
    )];

    match_run(&mut run, &pool);

    assert_eq!(run.results[0].status, TestStatus::Failure);
    assert_eq!(run.status, TestRunStatus::Complete);
}

#[test]
fn charge_missing_source_is_unresolved() {
    let mut run = payments_run();
    let pool = vec![charge(201, r#"{"amount":{"total":300}}"#)];

    match_run(&mut run, &pool);

    assert!(run.results.is_empty());
    assert_eq!(run.status, TestRunStatus::InProgress);

    let report = RunReport::from_run(&run);
    assert_eq!(report.cases[0].outcome, CaseOutcome::NoTransactionFound);
    assert_eq!(report.attempted, 0);
}

#[test]
fn decimal_amount_matches_as_written() {
    let suite = TestSuite::new("s2", "Decimals").with_case(
        TestCase::new("c1", "Cents", CHARGES, 201).with_predicate("amount.total", "12.50"),
    );
    let mut run = TestRun::new("r2", "Decimal Run", "1234567890123456", suite);
    let pool = vec![charge(201, r#"{"amount":{"total":12.50}}"#)];

    match_run(&mut run, &pool);

    assert_eq!(run.status, TestRunStatus::Complete);
    assert_eq!(run.results[0].status, TestStatus::Success);
}

#[test]
fn cases_without_ids_are_reported_separately() {
    let suite = TestSuite::new("s3", "NoIds")
        .with_case(TestCase::new("", "charge", CHARGES, 201))
        .with_case(TestCase::new("", "refund", "/ch/payments/v1/refunds", 201));
    let mut run = TestRun::new("r3", "No Id Run", "1234567890123456", suite);
    let pool = vec![charge(201, "{}")];

    match_run(&mut run, &pool);

    assert_eq!(run.status, TestRunStatus::InProgress);
    let report = RunReport::from_run(&run);
    assert_eq!(report.cases[0].outcome, CaseOutcome::Success);
    assert_eq!(report.cases[1].outcome, CaseOutcome::NoTransactionFound);
    assert_eq!(report.attempted, 1);
}

#[test]
fn templated_path() {
    assert!(url_matches("/users/42/orders", "/users/:id/orders"));
    assert!(!url_matches("/users/42/orders/extra", "/users/:id/orders"));
}

#[test]
fn mixed_suite_report() {
    let suite = TestSuite::new("s1", "TestSuite1")
        .with_case(
            TestCase::new("c1", "TestCase1", CHARGES, 201)
                .with_predicate("amount.total", "300")
                .with_predicate("source.sourceType", "PaymentTrack")
                .with_predicate("transactionDetails.captureFlag", "True"),
        )
        .with_case(TestCase::new("c2", "TestCase2", CHARGES, 500).with_predicate("amount.total", "200"))
        .with_case(TestCase::new("c3", "TestCase3", CHARGES, 201).with_predicate("amount.total", "900"))
        .with_case(TestCase::new("c4", "TestCase4", "/users/:id/orders", 200));
    let mut run = TestRun::new("r1", "Tom Run 1", "h1", suite);

    let pool = vec![
        Transaction::new("t4", "/users/7/orders", 200),
        Transaction::new("t3", CHARGES, 500).with_request(r#"{"amount":{"total":200}}"#),
        Transaction::new("t2", CHARGES, 201).with_request(r#"{"amount":{"total":900}}"#),
        Transaction::new("t1", CHARGES, 201).with_request(
            r#"{"amount":{"total":300},"source":{"sourceType":"PaymentTrack"},"transactionDetails":{"captureFlag":true}}"#,
        ),
    ];

    let summary = match_run(&mut run, &pool);
    assert!(summary.is_complete());
    assert_eq!(summary.succeeded, 4);

    let report = RunReport::from_run(&run);
    assert!(report.all_passed());
    let assigned: Vec<_> = report
        .cases
        .iter()
        .map(|c| c.transaction_id.clone().unwrap_or_default())
        .collect();
    assert_eq!(assigned, vec!["t1", "t3", "t2", "t4"]);
}
