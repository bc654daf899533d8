use crate::domain::{DocType, Jurisdiction};

/// Bumped whenever [`DEFAULT_CHECKLIST`] changes. Tenants pick up a new
/// version only through an explicit reset.
pub const CHECKLIST_VERSION: u32 = 1;

const GENERAL: &str = "general";
const HEALTHCARE: &str = "healthcare";

/// One canonical requirement, before it is embedded for a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub doc_type: DocType,
    pub jurisdiction: Jurisdiction,
    pub industry: &'static str,
    pub text: &'static str,
}

const fn entry(
    doc_type: DocType,
    jurisdiction: Jurisdiction,
    industry: &'static str,
    text: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        doc_type,
        jurisdiction,
        industry,
        text,
    }
}

use DocType::{EmployeeHandbook, Formulary, IncidentResponse, PrivacyPolicy};
use Jurisdiction::{Eu, UsCa, UsHipaa};

pub const DEFAULT_CHECKLIST: &[CatalogEntry] = &[
    entry(
        DocType::General,
        Jurisdiction::General,
        GENERAL,
        "Data retention policy defines retention periods for employee and customer data.",
    ),
    entry(
        IncidentResponse,
        Jurisdiction::General,
        GENERAL,
        "Incident response plan includes breach notification timelines.",
    ),
    entry(
        PrivacyPolicy,
        Jurisdiction::General,
        GENERAL,
        "Privacy notice discloses data sharing with third parties.",
    ),
    entry(
        DocType::General,
        Jurisdiction::General,
        GENERAL,
        "Access controls are documented for sensitive systems.",
    ),
    entry(
        EmployeeHandbook,
        Jurisdiction::General,
        GENERAL,
        "Employee handbook covers acceptable use and confidentiality.",
    ),
    entry(
        PrivacyPolicy,
        Jurisdiction::General,
        GENERAL,
        "Privacy notice explains how to exercise data subject rights.",
    ),
    entry(
        PrivacyPolicy,
        Jurisdiction::General,
        GENERAL,
        "Cookie and tracking disclosures are documented.",
    ),
    entry(
        PrivacyPolicy,
        UsCa,
        GENERAL,
        "CCPA/CPRA disclosures cover categories of personal information collected.",
    ),
    entry(
        PrivacyPolicy,
        UsCa,
        GENERAL,
        "Opt-out mechanisms for sale/sharing of personal information are described.",
    ),
    entry(
        PrivacyPolicy,
        Eu,
        GENERAL,
        "GDPR lawful bases for processing are documented.",
    ),
    entry(
        PrivacyPolicy,
        Eu,
        GENERAL,
        "EU data transfer mechanisms are identified.",
    ),
    entry(
        IncidentResponse,
        Jurisdiction::General,
        GENERAL,
        "Incident response plan defines roles and escalation paths.",
    ),
    entry(
        IncidentResponse,
        Jurisdiction::General,
        GENERAL,
        "Breach notification templates are prepared.",
    ),
    entry(
        IncidentResponse,
        UsHipaa,
        HEALTHCARE,
        "HIPAA breach notification timelines and patient notice steps are documented.",
    ),
    entry(
        EmployeeHandbook,
        Jurisdiction::General,
        GENERAL,
        "Employee handbook includes data privacy and security expectations.",
    ),
    entry(
        EmployeeHandbook,
        Jurisdiction::General,
        GENERAL,
        "Remote work and device security practices are documented.",
    ),
    entry(
        EmployeeHandbook,
        Jurisdiction::General,
        GENERAL,
        "Confidentiality agreements and reporting procedures are stated.",
    ),
    entry(
        DocType::General,
        Jurisdiction::General,
        GENERAL,
        "Vendor risk management procedures are documented.",
    ),
    entry(
        DocType::General,
        Jurisdiction::General,
        GENERAL,
        "Data classification and handling guidelines are documented.",
    ),
    entry(
        DocType::General,
        Jurisdiction::General,
        GENERAL,
        "Access reviews and user provisioning workflows are documented.",
    ),
    entry(
        Formulary,
        Jurisdiction::General,
        HEALTHCARE,
        "Formulary explains medication tier structure and cost sharing.",
    ),
    entry(
        Formulary,
        Jurisdiction::General,
        HEALTHCARE,
        "Formulary lists covered medications with tier placement.",
    ),
    entry(
        Formulary,
        Jurisdiction::General,
        HEALTHCARE,
        "Formulary describes prior authorization or step therapy rules.",
    ),
    entry(
        Formulary,
        Jurisdiction::General,
        HEALTHCARE,
        "Formulary outlines exceptions or coverage request process.",
    ),
    entry(
        Formulary,
        Jurisdiction::General,
        HEALTHCARE,
        "Formulary includes guidance for non-formulary or excluded drugs.",
    ),
    entry(
        Formulary,
        Jurisdiction::General,
        HEALTHCARE,
        "Formulary defines generic vs brand naming conventions.",
    ),
    entry(
        Formulary,
        Jurisdiction::General,
        HEALTHCARE,
        "Formulary explains specialty pharmacy or mail order requirements.",
    ),
    entry(
        Formulary,
        Jurisdiction::General,
        HEALTHCARE,
        "Formulary includes quantity limits or utilization management notes.",
    ),
    entry(
        Formulary,
        Jurisdiction::General,
        HEALTHCARE,
        "Formulary provides effective date and update cadence.",
    ),
    entry(
        Formulary,
        Jurisdiction::General,
        HEALTHCARE,
        "Formulary specifies how to find in-network pharmacies.",
    ),
    entry(
        Formulary,
        Jurisdiction::General,
        HEALTHCARE,
        "Formulary lists key therapeutic classes and categories.",
    ),
];
