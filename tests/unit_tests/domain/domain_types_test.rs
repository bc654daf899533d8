use policy_audit::domain::{
    ChecklistItem, ContentType, DEFAULT_FILENAME, DocType, Document, Embedding, GAP_REASON,
    Industry, Jurisdiction, PolicyGap, Rating, Severity, TenantId, UsageEvent,
};

#[test]
fn given_synonym_label_when_normalizing_doc_type_then_maps_to_canonical() {
    assert_eq!(DocType::normalize("privacy_notice"), DocType::PrivacyPolicy);
    assert_eq!(DocType::normalize("dr_plan"), DocType::BusinessContinuity);
    assert_eq!(DocType::normalize("soc2_report"), DocType::AuditReport);
}

#[test]
fn given_label_with_spaces_and_case_when_normalizing_then_maps_to_canonical() {
    assert_eq!(DocType::normalize("Incident Response"), DocType::IncidentResponse);
    assert_eq!(DocType::normalize("  FORMULARY "), DocType::Formulary);
}

#[test]
fn given_unknown_label_when_normalizing_doc_type_then_returns_general() {
    assert_eq!(DocType::normalize("quarterly newsletter"), DocType::General);
    assert_eq!(DocType::normalize(""), DocType::General);
}

#[test]
fn given_every_doc_type_when_round_tripping_label_then_parses_back() {
    for doc_type in DocType::ALL {
        assert_eq!(doc_type.as_str().parse::<DocType>(), Ok(doc_type));
    }
}

#[test]
fn given_jurisdiction_labels_when_normalizing_then_unknown_becomes_general() {
    assert_eq!(Jurisdiction::normalize("EU"), Jurisdiction::Eu);
    assert_eq!(Jurisdiction::normalize("us-ca"), Jurisdiction::UsCa);
    assert_eq!(Jurisdiction::normalize("us-hipaa"), Jurisdiction::UsHipaa);
    assert_eq!(Jurisdiction::normalize("apac"), Jurisdiction::General);
}

#[test]
fn given_jurisdiction_when_serializing_then_uses_hyphenated_label() {
    let json = serde_json::to_string(&Jurisdiction::UsHipaa).unwrap();
    assert_eq!(json, "\"us-hipaa\"");
}

#[test]
fn given_padded_industry_when_creating_then_trims_and_lowercases() {
    let industry = Industry::new("  Retail ");
    assert_eq!(industry.as_str(), "retail");
    assert!(!industry.is_general());
}

#[test]
fn given_blank_industry_when_creating_then_defaults_to_general() {
    assert!(Industry::new("   ").is_general());
    assert!(Industry::default().is_general());
}

#[test]
fn given_general_checklist_item_when_checking_applicability_then_acts_as_wildcard() {
    let item = ChecklistItem::new(
        TenantId::new(),
        DocType::General,
        Jurisdiction::General,
        Industry::general(),
        "Access controls are documented for sensitive systems.",
        Embedding::zeros(4),
    );

    assert!(item.applies_to(DocType::PrivacyPolicy, Jurisdiction::Eu));
    assert!(item.applies_to(DocType::Formulary, Jurisdiction::General));
}

#[test]
fn given_eu_privacy_item_when_checking_applicability_then_requires_both_tags() {
    let item = ChecklistItem::new(
        TenantId::new(),
        DocType::PrivacyPolicy,
        Jurisdiction::Eu,
        Industry::general(),
        "GDPR lawful bases for processing are documented.",
        Embedding::zeros(4),
    );

    assert!(item.applies_to(DocType::PrivacyPolicy, Jurisdiction::Eu));
    assert!(!item.applies_to(DocType::PrivacyPolicy, Jurisdiction::UsCa));
    assert!(!item.applies_to(DocType::EmployeeHandbook, Jurisdiction::Eu));
}

#[test]
fn given_unmatched_item_when_creating_gap_then_uses_fixed_reason_and_medium_severity() {
    let gap = PolicyGap::unmatched("Breach notification templates are prepared.");

    assert_eq!(gap.reason, GAP_REASON);
    assert_eq!(gap.severity, Severity::Medium);
    assert_eq!(
        serde_json::to_value(&gap).unwrap()["severity"],
        serde_json::json!("medium")
    );
}

#[test]
fn given_band_edges_when_rating_scores_then_bands_are_contiguous() {
    assert_eq!(Rating::from_score(100), Rating::OnTrack);
    assert_eq!(Rating::from_score(85), Rating::OnTrack);
    assert_eq!(Rating::from_score(84), Rating::NeedsAttention);
    assert_eq!(Rating::from_score(70), Rating::NeedsAttention);
    assert_eq!(Rating::from_score(69), Rating::HighRisk);
    assert_eq!(Rating::from_score(0), Rating::HighRisk);
}

#[test]
fn given_rating_when_serializing_then_uses_human_label() {
    assert_eq!(
        serde_json::to_string(&Rating::NeedsAttention).unwrap(),
        "\"Needs attention\""
    );
    assert_eq!(Rating::HighRisk.to_string(), "High risk");
}

#[test]
fn given_blank_filename_when_creating_document_then_uses_default_name() {
    let document = Document::new("  ", ContentType::Pdf, 10);
    assert_eq!(document.filename, DEFAULT_FILENAME);
}

#[test]
fn given_audit_counts_when_creating_usage_event_then_bills_one_unit() {
    let tenant_id = TenantId::new();
    let event = UsageEvent::policy_audit(tenant_id, 4.5, 3, 7);

    assert_eq!(event.event_type, "policy_audit");
    assert_eq!(event.units, 1);
    assert_eq!(event.total_cost, 4.5);
    assert_eq!((event.matched, event.gaps), (3, 7));
}
