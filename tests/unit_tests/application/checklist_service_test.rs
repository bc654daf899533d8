use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use policy_audit::application::ports::{ChecklistRepository, Embedder, EmbedderError, EmbedderInfo};
use policy_audit::application::services::{CHECKLIST_VERSION, ChecklistService, DEFAULT_CHECKLIST};
use policy_audit::domain::{
    DocType, DocumentClassification, Embedding, Jurisdiction, TenantId,
};
use policy_audit::infrastructure::llm::HashEmbedder;
use policy_audit::infrastructure::persistence::InMemoryChecklistRepository;

const DIMENSION: usize = 256;

/// Hash embedder that counts how often a batch is embedded.
struct CountingEmbedder {
    inner: HashEmbedder,
    batches: AtomicUsize,
}

impl CountingEmbedder {
    fn new() -> Self {
        Self {
            inner: HashEmbedder::new(DIMENSION),
            batches: AtomicUsize::new(0),
        }
    }

    fn batches(&self) -> usize {
        self.batches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Embedder for CountingEmbedder {
    async fn embed_one(&self, text: &str) -> Result<Embedding, EmbedderError> {
        self.inner.embed_one(text).await
    }

    async fn embed_many(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        self.batches.fetch_add(1, Ordering::SeqCst);
        self.inner.embed_many(texts).await
    }

    fn dimension(&self) -> usize {
        DIMENSION
    }

    fn info(&self) -> EmbedderInfo {
        self.inner.info()
    }
}

fn create_service() -> (ChecklistService, Arc<CountingEmbedder>, Arc<InMemoryChecklistRepository>) {
    let embedder = Arc::new(CountingEmbedder::new());
    let repository = Arc::new(InMemoryChecklistRepository::new());
    let service = ChecklistService::new(repository.clone(), embedder.clone());
    (service, embedder, repository)
}

#[test]
fn given_canonical_checklist_when_inspecting_then_has_thirty_one_entries_at_version_one() {
    assert_eq!(DEFAULT_CHECKLIST.len(), 31);
    assert_eq!(CHECKLIST_VERSION, 1);
}

#[tokio::test]
async fn given_unseeded_tenant_when_ensuring_twice_then_seeds_exactly_once() {
    let (service, embedder, _repository) = create_service();
    let tenant_id = TenantId::new();

    let first = service.ensure(tenant_id).await.unwrap();
    let second = service.ensure(tenant_id).await.unwrap();

    assert_eq!(embedder.batches(), 1);
    assert_eq!(first.len(), DEFAULT_CHECKLIST.len());
    assert_eq!(first, second);
}

#[tokio::test]
async fn given_concurrent_ensure_calls_when_tenant_is_unseeded_then_seeds_once() {
    let (service, embedder, repository) = create_service();
    let tenant_id = TenantId::new();

    let (a, b) = tokio::join!(service.ensure(tenant_id), service.ensure(tenant_id));

    assert_eq!(a.unwrap().len(), DEFAULT_CHECKLIST.len());
    assert_eq!(b.unwrap().len(), DEFAULT_CHECKLIST.len());
    assert_eq!(embedder.batches(), 1);
    assert_eq!(
        repository.list(tenant_id).await.unwrap().len(),
        DEFAULT_CHECKLIST.len()
    );
}

#[tokio::test]
async fn given_seeded_tenant_when_resetting_then_replaces_every_item() {
    let (service, embedder, repository) = create_service();
    let tenant_id = TenantId::new();
    let original = service.ensure(tenant_id).await.unwrap();

    let reset = service.reset(tenant_id).await.unwrap();

    assert_eq!(embedder.batches(), 2);
    assert_eq!(reset.len(), original.len());
    let original_ids: HashSet<_> = original.iter().map(|i| i.id).collect();
    assert!(reset.iter().all(|i| !original_ids.contains(&i.id)));
    assert_eq!(repository.list(tenant_id).await.unwrap(), reset);
}

#[tokio::test]
async fn given_seeded_items_when_inspecting_then_embeddings_share_dimension_and_tags() {
    let (service, _embedder, _repository) = create_service();

    let items = service.ensure(TenantId::new()).await.unwrap();

    assert!(items.iter().all(|i| i.embedding.dimensions() == DIMENSION));
    let formulary: Vec<_> = items
        .iter()
        .filter(|i| i.doc_type == DocType::Formulary)
        .collect();
    assert_eq!(formulary.len(), 11);
    assert!(formulary.iter().all(|i| i.industry.is_healthcare()));
}

#[tokio::test]
async fn given_eu_privacy_document_when_selecting_checklist_then_filters_by_tags_with_general() {
    let (service, _embedder, _repository) = create_service();
    let tenant_id = TenantId::new();
    service.ensure(tenant_id).await.unwrap();
    let classification =
        DocumentClassification::new(DocType::PrivacyPolicy, Jurisdiction::Eu, "test");

    let items = service
        .checklist_for(tenant_id, &classification)
        .await
        .unwrap();

    assert_eq!(items.len(), 10);
    assert!(items
        .iter()
        .all(|i| i.applies_to(DocType::PrivacyPolicy, Jurisdiction::Eu)));
}

#[tokio::test]
async fn given_unseeded_tenant_when_selecting_checklist_then_falls_back_to_full_seeded_list() {
    let (service, embedder, _repository) = create_service();
    let classification =
        DocumentClassification::new(DocType::Formulary, Jurisdiction::General, "test");

    let items = service
        .checklist_for(TenantId::new(), &classification)
        .await
        .unwrap();

    assert_eq!(items.len(), DEFAULT_CHECKLIST.len());
    assert_eq!(embedder.batches(), 1);
}

#[tokio::test]
async fn given_two_tenants_when_resetting_one_then_other_is_untouched() {
    let (service, _embedder, repository) = create_service();
    let tenant_a = TenantId::new();
    let tenant_b = TenantId::new();
    let b_items = service.ensure(tenant_b).await.unwrap();
    service.ensure(tenant_a).await.unwrap();

    service.reset(tenant_a).await.unwrap();

    assert_eq!(repository.list(tenant_b).await.unwrap(), b_items);
}

#[tokio::test]
async fn given_finished_operations_for_many_tenants_when_inspecting_locks_then_none_are_retained() {
    let (service, _embedder, _repository) = create_service();

    for _ in 0..5 {
        service.ensure(TenantId::new()).await.unwrap();
    }

    assert_eq!(service.tracked_tenants().await, 0);
}
