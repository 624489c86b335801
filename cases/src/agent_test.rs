use super::*;

fn case_manager_json() -> Value {
    serde_json::json!({
        "case_id": "DSP-2024-001234",
        "cardholder_statement": "I don't remember going to Joe's Cafe.",
        "merchant_analysis": {
            "decoded_name": "Joe's Cafe (Square)",
            "is_subscription": false,
            "confidence": 0.92
        },
        "evidence_summary": {
            "location_verified": true,
            "device_verified": true,
            "family_usage_suspected": false,
            "evidence_score": 0.81
        },
        "risk_assessment": {
            "friendly_fraud_score": 0.68,
            "risk_level": "medium",
            "recommendation": "manual_review"
        },
        "case_summary": "Customer disputes a cafe charge.",
        "recommended_action": "manual_review_required",
        "key_findings": ["GPS places the phone at the merchant"],
        "next_steps": ["Contact merchant"]
    })
}

// =============================================================
// AgentKind
// =============================================================

#[test]
fn agent_kind_round_trips_through_slug() {
    for kind in AgentKind::ALL {
        assert_eq!(kind.as_str().parse::<AgentKind>(), Ok(kind));
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(json, Value::String(kind.as_str().to_owned()));
    }
}

#[test]
fn agent_kind_accepts_snake_case_alias() {
    assert_eq!("risk_scoring".parse::<AgentKind>(), Ok(AgentKind::RiskScoring));
    assert!(matches!("fraud-bot".parse::<AgentKind>(), Err(CaseError::UnknownAgent(_))));
}

#[test]
fn agent_ids_are_distinct() {
    let mut ids: Vec<&str> = AgentKind::ALL.iter().map(|k| k.default_id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

// =============================================================
// Envelope decoding
// =============================================================

#[test]
fn successful_result_decodes_case_manager_shape() {
    let envelope = AgentEnvelope::ok(AgentReply {
        status: "success".to_owned(),
        result: case_manager_json(),
        message: None,
    });
    let result: CaseManagerResult = envelope.successful_result().unwrap();
    assert_eq!(result.case_id, "DSP-2024-001234");
    assert!(result.evidence_summary.location_verified);
    assert!((result.risk_assessment.friendly_fraud_score - 0.68).abs() < f64::EPSILON);
    assert_eq!(result.key_findings.len(), 1);
}

#[test]
fn successful_result_rejects_non_success_status() {
    let envelope = AgentEnvelope::ok(AgentReply {
        status: "error".to_owned(),
        result: case_manager_json(),
        message: Some("agent busy".to_owned()),
    });
    assert!(envelope.successful_result::<CaseManagerResult>().is_none());
    assert!(envelope.any_result::<CaseManagerResult>().is_some());
}

#[test]
fn failed_envelope_has_no_result() {
    let envelope = AgentEnvelope::failed("network down");
    assert!(!envelope.success);
    assert!(envelope.successful_result::<CaseManagerResult>().is_none());
    assert!(envelope.any_result::<CaseManagerResult>().is_none());
}

#[test]
fn non_object_result_is_rejected() {
    let envelope = AgentEnvelope::ok(AgentReply {
        status: "success".to_owned(),
        result: Value::String("plain text".to_owned()),
        message: None,
    });
    assert!(envelope.successful_result::<CaseManagerResult>().is_none());
}

#[test]
fn partial_result_fills_defaults() {
    let envelope = AgentEnvelope::ok(AgentReply {
        status: "success".to_owned(),
        result: serde_json::json!({ "case_id": "DSP-9" }),
        message: None,
    });
    let result: CaseManagerResult = envelope.successful_result().unwrap();
    assert_eq!(result.case_id, "DSP-9");
    assert!(result.case_summary.is_empty());
    assert!(result.next_steps.is_empty());
}

#[test]
fn null_fields_decode_as_defaults() {
    let envelope = AgentEnvelope::ok(AgentReply {
        status: "success".to_owned(),
        result: serde_json::json!({
            "case_id": null,
            "case_summary": null,
            "merchant_analysis": { "decoded_name": null, "confidence": 0.8 },
            "next_steps": ["Call customer", null]
        }),
        message: None,
    });
    let result: CaseManagerResult = envelope.successful_result().unwrap();
    assert!(result.case_id.is_empty());
    assert!(result.case_summary.is_empty());
    assert!(result.merchant_analysis.decoded_name.is_empty());
    assert_eq!(result.next_steps, vec!["Call customer".to_owned()]);
}

#[test]
fn null_fields_decode_in_resolution_shape() {
    let envelope = AgentEnvelope::ok(AgentReply {
        status: "success".to_owned(),
        result: serde_json::json!({ "action_taken": null, "compliance_notes": null }),
        message: None,
    });
    let result: ResolutionResult = envelope.any_result().unwrap();
    assert_eq!(result, ResolutionResult::default());
}

#[test]
fn envelope_wire_shape_omits_empty_optionals() {
    let json = serde_json::to_value(AgentEnvelope::failed("boom")).unwrap();
    assert_eq!(json, serde_json::json!({ "success": false, "error": "boom" }));
}

#[test]
fn agent_request_uses_kebab_case_agent() {
    let req: AgentRequest =
        serde_json::from_value(serde_json::json!({ "message": "hi", "agent": "evidence-correlator" })).unwrap();
    assert_eq!(req.agent, AgentKind::EvidenceCorrelator);
}

#[test]
fn recommended_action_display_uppercases_words() {
    let result = CaseManagerResult {
        recommended_action: "approve_provisional_credit".to_owned(),
        ..CaseManagerResult::default()
    };
    assert_eq!(result.recommended_action_display(), "APPROVE PROVISIONAL CREDIT");
}

// =============================================================
// Other shapes
// =============================================================

#[test]
fn evidence_correlator_decodes_null_family_member() {
    let value = serde_json::json!({
        "location_match": {
            "user_was_present": true,
            "distance_from_transaction": 0.1,
            "user_location_at_time": "37.7750, -122.4195",
            "transaction_location": "37.7749, -122.4194",
            "confidence": 0.95
        },
        "device_match": {
            "device_id_matches": true,
            "registered_device": "Pixel 6A",
            "transaction_device_id": "px6a-0012",
            "is_known_device": true
        },
        "family_usage_analysis": {
            "potential_family_member": null,
            "family_member_likelihood": 0.1,
            "supporting_evidence": []
        },
        "overall_evidence_score": 0.88,
        "red_flags": [],
        "supporting_factors": ["Known device"]
    });
    let result: EvidenceCorrelatorResult = serde_json::from_value(value).unwrap();
    assert!(result.family_usage_analysis.potential_family_member.is_none());
    assert_eq!(result.device_match.registered_device, "Pixel 6A");
}

#[test]
fn risk_scoring_accepts_float_counts() {
    let value = serde_json::json!({
        "friendly_fraud_score": 0.3,
        "account_analysis": { "account_age_days": 730.0 },
        "dispute_history": { "total_disputes": 2, "win_rate": 0.5 },
        "risk_factors": [{ "factor": "New device", "severity": "low", "impact_on_score": 0.05 }]
    });
    let result: RiskScoringResult = serde_json::from_value(value).unwrap();
    assert!((result.account_analysis.account_age_days - 730.0).abs() < f64::EPSILON);
    assert_eq!(result.risk_factors.len(), 1);
}

#[test]
fn resolution_decodes_chargeback() {
    let value = serde_json::json!({
        "action_taken": "provisional_credit_and_chargeback",
        "resolution_details": {
            "provisional_credit": { "credited": true, "credit_amount": 45.99, "credit_date": "2024-01-16", "reversal_date": null },
            "chargeback": { "filed": true, "chargeback_id": "CB-1", "reason_code": "10.4", "network": "Visa" }
        },
        "tracking": { "case_status": "open", "next_review_date": "2024-02-15" }
    });
    let result: ResolutionResult = serde_json::from_value(value).unwrap();
    assert!(result.resolution_details.chargeback.filed);
    assert_eq!(result.resolution_details.chargeback.reason_code, "10.4");
    assert!(result.resolution_details.provisional_credit.reversal_date.is_none());
}
