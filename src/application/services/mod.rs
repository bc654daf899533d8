mod checklist_catalog;
mod checklist_matcher;
mod checklist_service;
mod policy_audit_service;
mod scoring;
mod settings_service;

pub use checklist_catalog::{CHECKLIST_VERSION, CatalogEntry, DEFAULT_CHECKLIST};
pub use checklist_matcher::{ChecklistMatcher, match_embeddings, nearest_distance};
pub use checklist_service::{ChecklistError, ChecklistService};
pub use policy_audit_service::{AuditError, PolicyAuditComponents, PolicyAuditService};
pub use scoring::{GUARDRAIL_MESSAGE, apply_guardrail, assess, score};
pub use settings_service::{INDUSTRY_KEY, SettingsError, SettingsService, THRESHOLD_KEY};
