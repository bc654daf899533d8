use async_trait::async_trait;

use crate::application::ports::DocumentClassifier;
use crate::domain::{DocType, DocumentClassification, Industry, Jurisdiction, apply_industry_bias};

pub const HEURISTIC_PROVIDER: &str = "heuristic";
const DEFAULT_REASONING: &str = "Heuristic default";

/// One step of the doc-type priority chain.
///
/// When `triggers` matches, evaluation stops at this rule. `qualifier`, if
/// present, must also match for `doc_type` to be assigned; otherwise the
/// document stays `general` and no later rule is consulted.
pub struct DocTypeRule {
    pub name: &'static str,
    pub doc_type: DocType,
    pub reason: &'static str,
    triggers: fn(&str) -> bool,
    qualifier: Option<fn(&str) -> bool>,
}

/// Outcome of evaluating a single rule against lower-cased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    NotTriggered,
    Assigned(DocType),
    Unqualified,
}

impl DocTypeRule {
    pub fn evaluate(&self, lowered: &str) -> RuleOutcome {
        if !(self.triggers)(lowered) {
            return RuleOutcome::NotTriggered;
        }
        match self.qualifier {
            Some(qualifies) if !qualifies(lowered) => RuleOutcome::Unqualified,
            _ => RuleOutcome::Assigned(self.doc_type),
        }
    }
}

fn any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

pub const DOC_TYPE_RULES: &[DocTypeRule] = &[
    DocTypeRule {
        name: "formulary",
        doc_type: DocType::Formulary,
        reason: "Detected formulary/medication tier language",
        triggers: |t| {
            t.contains("formulary") || (t.contains("tier") && any(t, &["medication", "drug"]))
        },
        qualifier: None,
    },
    DocTypeRule {
        name: "employee_handbook",
        doc_type: DocType::EmployeeHandbook,
        reason: "Detected employee handbook language",
        triggers: |t| {
            t.contains("employee handbook") || (t.contains("employee") && t.contains("handbook"))
        },
        qualifier: None,
    },
    DocTypeRule {
        name: "privacy_policy",
        doc_type: DocType::PrivacyPolicy,
        reason: "Detected privacy policy/notice language",
        triggers: |t| any(t, &["privacy policy", "privacy notice"]),
        qualifier: None,
    },
    DocTypeRule {
        name: "incident_response",
        doc_type: DocType::IncidentResponse,
        reason: "Detected incident response language",
        triggers: |t| t.contains("incident response"),
        qualifier: None,
    },
    DocTypeRule {
        name: "business_continuity",
        doc_type: DocType::BusinessContinuity,
        reason: "Detected business continuity/disaster recovery language",
        triggers: |t| any(t, &["business continuity", "disaster recovery"]),
        qualifier: None,
    },
    DocTypeRule {
        name: "risk_assessment",
        doc_type: DocType::RiskAssessment,
        reason: "Detected risk assessment language",
        triggers: |t| any(t, &["risk assessment", "risk analysis"]),
        qualifier: None,
    },
    DocTypeRule {
        name: "audit_report",
        doc_type: DocType::AuditReport,
        reason: "Detected audit/assessment report language",
        triggers: |t| any(t, &["audit report", "assessment report"]),
        qualifier: None,
    },
    DocTypeRule {
        name: "security_architecture",
        doc_type: DocType::SecurityArchitecture,
        reason: "Detected security architecture language",
        triggers: |t| any(t, &["security architecture", "architecture diagram"]),
        qualifier: None,
    },
    DocTypeRule {
        name: "vendor_program",
        doc_type: DocType::VendorProgram,
        reason: "Detected vendor/third-party program language",
        triggers: |t| any(t, &["vendor", "third party"]),
        qualifier: Some(|t| any(t, &["management", "program", "due diligence"])),
    },
    DocTypeRule {
        name: "training_attestation",
        doc_type: DocType::TrainingAttestation,
        reason: "Detected training/attestation language",
        triggers: |t| any(t, &["training", "security awareness", "attestation"]),
        qualifier: None,
    },
    DocTypeRule {
        name: "legal_contract",
        doc_type: DocType::LegalContract,
        reason: "Detected contractual language",
        triggers: |t| any(t, &["contract", "agreement", "msa"]),
        qualifier: None,
    },
    DocTypeRule {
        name: "compliance_report",
        doc_type: DocType::ComplianceReport,
        reason: "Detected compliance report language",
        triggers: |t| any(t, &["compliance report", "soc 2", "iso 27001"]),
        qualifier: None,
    },
    DocTypeRule {
        name: "policy",
        doc_type: DocType::Policy,
        reason: "Detected policy language",
        triggers: |t| t.contains("policy"),
        qualifier: None,
    },
    DocTypeRule {
        name: "procedure",
        doc_type: DocType::Procedure,
        reason: "Detected procedure language",
        triggers: |t| any(t, &["procedure", "sop"]),
        qualifier: None,
    },
];

/// Jurisdiction signals, first match wins.
pub const JURISDICTION_RULES: &[(&[&str], Jurisdiction, &str)] = &[
    (&["gdpr", "european union"], Jurisdiction::Eu, "Detected GDPR/EU references"),
    (&["ccpa", "california"], Jurisdiction::UsCa, "Detected California/CCPA references"),
    (&["hipaa"], Jurisdiction::UsHipaa, "Detected HIPAA references"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_text(&self, text: &str, industry: Option<&Industry>) -> DocumentClassification {
        let lowered = text.to_lowercase();
        let mut reasons: Vec<String> = Vec::new();

        let doc_type = match DOC_TYPE_RULES
            .iter()
            .map(|rule| (rule, rule.evaluate(&lowered)))
            .find(|(_, outcome)| *outcome != RuleOutcome::NotTriggered)
        {
            Some((rule, RuleOutcome::Assigned(doc_type))) => {
                reasons.push(rule.reason.to_string());
                doc_type
            }
            _ => DocType::General,
        };

        if let Some(industry) = industry.filter(|i| !i.is_general()) {
            reasons.push(format!("Industry context: {}", industry));
        }

        let jurisdiction = match JURISDICTION_RULES
            .iter()
            .find(|(needles, _, _)| any(&lowered, needles))
        {
            Some((_, jurisdiction, reason)) => {
                reasons.push((*reason).to_string());
                *jurisdiction
            }
            None => Jurisdiction::General,
        };

        let (jurisdiction, adjustment) = apply_industry_bias(jurisdiction, text, industry);
        if let Some(note) = adjustment {
            reasons.push(note.to_string());
        }

        let reasoning = if reasons.is_empty() {
            DEFAULT_REASONING.to_string()
        } else {
            reasons.join(", ")
        };

        DocumentClassification::new(doc_type, jurisdiction, reasoning)
    }
}

#[async_trait]
impl DocumentClassifier for HeuristicClassifier {
    async fn classify(&self, text: &str, industry: Option<&Industry>) -> DocumentClassification {
        self.classify_text(text, industry)
    }

    fn provider(&self) -> &'static str {
        HEURISTIC_PROVIDER
    }
}
