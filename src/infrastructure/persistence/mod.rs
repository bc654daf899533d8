mod pg_pool;
mod repositories;

pub use pg_pool::{connect_and_migrate, create_pool, run_migrations};
pub use repositories::{
    InMemoryAuditRepository, InMemoryChecklistRepository, InMemorySettingsRepository,
    PgChecklistRepository,
};
