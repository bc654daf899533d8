mod in_memory_audit_repository;
mod in_memory_checklist_repository;
mod in_memory_settings_repository;
mod pg_checklist_repository;

pub use in_memory_audit_repository::InMemoryAuditRepository;
pub use in_memory_checklist_repository::InMemoryChecklistRepository;
pub use in_memory_settings_repository::InMemorySettingsRepository;
pub use pg_checklist_repository::PgChecklistRepository;
