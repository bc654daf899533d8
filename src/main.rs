use std::sync::Arc;

use anyhow::Context;
use bytes::Bytes;
use uuid::Uuid;

use policy_audit::application::ports::{ChecklistRepository, Embedder};
use policy_audit::application::services::{
    ChecklistService, PolicyAuditComponents, PolicyAuditService, SettingsService,
};
use policy_audit::config::{Environment, Settings};
use policy_audit::domain::TenantId;
use policy_audit::infrastructure::classification::ClassifierFactory;
use policy_audit::infrastructure::llm::EmbedderFactory;
use policy_audit::infrastructure::observability::{TracingConfig, init_tracing};
use policy_audit::infrastructure::persistence::{
    InMemoryAuditRepository, InMemoryChecklistRepository, InMemorySettingsRepository,
    PgChecklistRepository, connect_and_migrate,
};
use policy_audit::infrastructure::storage::ObjectUploadStore;
use policy_audit::infrastructure::text_processing::{ParagraphChunker, PdfAdapter};

const USAGE: &str = "usage: policy-audit <file.pdf> [tenant-uuid]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(TracingConfig::new(environment, &settings.logging));

    let mut args = std::env::args().skip(1);
    let path = args.next().context(USAGE)?;
    let tenant_id = match args.next() {
        Some(raw) => TenantId::from_uuid(Uuid::parse_str(&raw).context("invalid tenant uuid")?),
        None => TenantId::new(),
    };

    let data = tokio::fs::read(&path)
        .await
        .with_context(|| format!("failed to read {path}"))?;
    let filename = std::path::Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    let embedder: Arc<dyn Embedder> =
        Arc::new(EmbedderFactory::create(&settings.embeddings, &settings.openai));

    let checklist_repository: Arc<dyn ChecklistRepository> = if settings.database.url.is_some() {
        let pool = connect_and_migrate(&settings.database).await?;
        Arc::new(PgChecklistRepository::new(pool))
    } else {
        Arc::new(InMemoryChecklistRepository::new())
    };

    let checklists = Arc::new(ChecklistService::new(
        checklist_repository,
        Arc::clone(&embedder),
    ));
    let tenant_settings = Arc::new(SettingsService::new(
        Arc::new(InMemorySettingsRepository::new()),
        settings.matching.default_threshold,
    ));

    let service = PolicyAuditService::new(PolicyAuditComponents {
        file_loader: Arc::new(PdfAdapter::new()),
        text_splitter: Arc::new(ParagraphChunker::new(settings.matching.max_chunk_chars)),
        classifier: Arc::new(ClassifierFactory::create(
            &settings.classifier,
            &settings.openai,
        )),
        embedder,
        checklists,
        settings: tenant_settings,
        uploads: Arc::new(ObjectUploadStore::local(&settings.storage.upload_path)?),
        audits: Arc::new(InMemoryAuditRepository::new()),
    });

    let record = service
        .run_audit(
            Bytes::from(data),
            &filename,
            tenant_id,
            settings.billing.scan_unit_cost,
        )
        .await?;

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
