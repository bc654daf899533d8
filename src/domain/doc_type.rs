use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    General,
    Policy,
    Procedure,
    RiskAssessment,
    ControlMapping,
    AuditReport,
    IncidentResponse,
    BusinessContinuity,
    PrivacyPolicy,
    SecurityArchitecture,
    VendorProgram,
    TrainingAttestation,
    LegalContract,
    ComplianceReport,
    EmployeeHandbook,
    Formulary,
}

const SYNONYMS: &[(&str, DocType)] = &[
    ("privacy_notice", DocType::PrivacyPolicy),
    ("incident_response_plan", DocType::IncidentResponse),
    ("disaster_recovery", DocType::BusinessContinuity),
    ("bcdr", DocType::BusinessContinuity),
    ("dr_plan", DocType::BusinessContinuity),
    ("sop", DocType::Procedure),
    ("standard_operating_procedure", DocType::Procedure),
    ("third_party", DocType::VendorProgram),
    ("vendor_management", DocType::VendorProgram),
    ("assessment_report", DocType::AuditReport),
    ("soc2_report", DocType::AuditReport),
    ("attestation_report", DocType::AuditReport),
    ("dpa", DocType::LegalContract),
    ("msa", DocType::LegalContract),
];

impl DocType {
    pub const ALL: [DocType; 16] = [
        DocType::General,
        DocType::Policy,
        DocType::Procedure,
        DocType::RiskAssessment,
        DocType::ControlMapping,
        DocType::AuditReport,
        DocType::IncidentResponse,
        DocType::BusinessContinuity,
        DocType::PrivacyPolicy,
        DocType::SecurityArchitecture,
        DocType::VendorProgram,
        DocType::TrainingAttestation,
        DocType::LegalContract,
        DocType::ComplianceReport,
        DocType::EmployeeHandbook,
        DocType::Formulary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::General => "general",
            DocType::Policy => "policy",
            DocType::Procedure => "procedure",
            DocType::RiskAssessment => "risk_assessment",
            DocType::ControlMapping => "control_mapping",
            DocType::AuditReport => "audit_report",
            DocType::IncidentResponse => "incident_response",
            DocType::BusinessContinuity => "business_continuity",
            DocType::PrivacyPolicy => "privacy_policy",
            DocType::SecurityArchitecture => "security_architecture",
            DocType::VendorProgram => "vendor_program",
            DocType::TrainingAttestation => "training_attestation",
            DocType::LegalContract => "legal_contract",
            DocType::ComplianceReport => "compliance_report",
            DocType::EmployeeHandbook => "employee_handbook",
            DocType::Formulary => "formulary",
        }
    }

    /// Maps a free-form or provider-supplied label onto the canonical set.
    /// Case and spaces are ignored, known synonyms are resolved and anything
    /// else becomes [`DocType::General`].
    pub fn normalize(label: &str) -> DocType {
        let key = label.trim().to_lowercase().replace(' ', "_");
        SYNONYMS
            .iter()
            .find(|(synonym, _)| *synonym == key)
            .map(|(_, doc_type)| *doc_type)
            .or_else(|| key.parse().ok())
            .unwrap_or(DocType::General)
    }
}

impl FromStr for DocType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocType::ALL
            .iter()
            .find(|d| d.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid doc type: {}", s))
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
