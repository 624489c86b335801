use super::*;

#[test]
fn sample_cases_has_three_records() {
    let cases = sample_cases();
    assert_eq!(cases.len(), 3);
    assert_eq!(cases[0].id, "SQJOESCAFE-2024-01-15-1459");
    assert_eq!(cases[2].status, CaseStatus::Escalated);
}

#[test]
fn case_status_parses_case_insensitively() {
    assert_eq!("Escalated".parse::<CaseStatus>(), Ok(CaseStatus::Escalated));
    assert_eq!(" pending ".parse::<CaseStatus>(), Ok(CaseStatus::Pending));
    assert_eq!(
        "closed".parse::<CaseStatus>(),
        Err(CaseError::UnknownStatus("closed".to_owned()))
    );
}

#[test]
fn case_status_serializes_lowercase() {
    let json = serde_json::to_value(CaseStatus::Denied).unwrap();
    assert_eq!(json, serde_json::json!("denied"));
}

#[test]
fn case_record_deserializes_from_wire_shape() {
    let json = serde_json::json!({
        "id": "DSP-1",
        "customer_name": "Pat Doe",
        "amount": 12.5,
        "merchant": "ACME",
        "date": "2024-02-01",
        "status": "approved",
        "risk_score": 40,
        "priority": "medium"
    });
    let record: CaseRecord = serde_json::from_value(json).unwrap();
    assert_eq!(record.status, CaseStatus::Approved);
    assert_eq!(record.priority, Priority::Medium);
    assert_eq!(record.risk_score, 40);
}

#[test]
fn analysis_prompt_mentions_amount_merchant_and_date() {
    let record = &sample_cases()[0];
    assert_eq!(
        record.analysis_prompt(),
        "I see a charge for $45.99 from 'SQ *JOES CAFE' on 2024-01-15. I don't recognize this charge."
    );
}

#[test]
fn format_usd_keeps_two_decimals() {
    assert_eq!(format_usd(599.0), "$599.00");
    assert_eq!(format_usd(129.99), "$129.99");
}

#[test]
fn pinned_transaction_matches_first_fixture() {
    let pinned = pinned_transaction();
    let first = &sample_cases()[0];
    assert_eq!(pinned.merchant, first.merchant);
    assert!((pinned.amount - first.amount).abs() < f64::EPSILON);
}

#[test]
fn evidence_and_risk_prompts_identify_the_case() {
    let record = sample_cases().remove(2);
    let evidence = record.evidence_prompt();
    assert!(evidence.contains("DSP-2024-001236"));
    assert!(evidence.contains("$599.00"));
    assert!(record.risk_prompt().contains("James Chen"));
}
