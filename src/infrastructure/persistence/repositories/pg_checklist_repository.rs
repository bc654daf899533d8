use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{ChecklistRepository, RepositoryError};
use crate::domain::{
    ChecklistItem, ChecklistItemId, DocType, Embedding, Industry, Jurisdiction, TenantId,
};

const SELECT_COLUMNS: &str =
    "id, tenant_id, doc_type, jurisdiction, industry, text, embedding, created_at";

/// Checklist items in Postgres, embeddings stored as `REAL[]`.
pub struct PgChecklistRepository {
    pool: PgPool,
}

impl PgChecklistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn query_failed(e: sqlx::Error) -> RepositoryError {
    RepositoryError::QueryFailed(e.to_string())
}

fn item_from_row(row: &PgRow) -> Result<ChecklistItem, RepositoryError> {
    let corrupt = |e: sqlx::Error| RepositoryError::CorruptRow(e.to_string());

    let id: Uuid = row.try_get("id").map_err(corrupt)?;
    let tenant_id: Uuid = row.try_get("tenant_id").map_err(corrupt)?;
    let doc_type: String = row.try_get("doc_type").map_err(corrupt)?;
    let jurisdiction: String = row.try_get("jurisdiction").map_err(corrupt)?;
    let industry: String = row.try_get("industry").map_err(corrupt)?;
    let text: String = row.try_get("text").map_err(corrupt)?;
    let embedding: Vec<f32> = row.try_get("embedding").map_err(corrupt)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(corrupt)?;

    Ok(ChecklistItem {
        id: ChecklistItemId::from_uuid(id),
        tenant_id: TenantId::from_uuid(tenant_id),
        doc_type: doc_type
            .parse::<DocType>()
            .map_err(RepositoryError::CorruptRow)?,
        jurisdiction: jurisdiction
            .parse::<Jurisdiction>()
            .map_err(RepositoryError::CorruptRow)?,
        industry: Industry::new(&industry),
        text,
        embedding: Embedding::new(embedding),
        created_at,
    })
}

#[async_trait]
impl ChecklistRepository for PgChecklistRepository {
    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    async fn list(&self, tenant_id: TenantId) -> Result<Vec<ChecklistItem>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM checklist_items WHERE tenant_id = $1 ORDER BY seq"
        ))
        .bind(tenant_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        rows.iter().map(item_from_row).collect()
    }

    #[instrument(skip(self, doc_types, jurisdictions), fields(tenant_id = %tenant_id))]
    async fn list_matching(
        &self,
        tenant_id: TenantId,
        doc_types: &[DocType],
        jurisdictions: &[Jurisdiction],
    ) -> Result<Vec<ChecklistItem>, RepositoryError> {
        let doc_types: Vec<String> = doc_types.iter().map(|d| d.as_str().to_string()).collect();
        let jurisdictions: Vec<String> = jurisdictions
            .iter()
            .map(|j| j.as_str().to_string())
            .collect();

        let rows = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM checklist_items \
             WHERE tenant_id = $1 AND doc_type = ANY($2) AND jurisdiction = ANY($3) \
             ORDER BY seq"
        ))
        .bind(tenant_id.as_uuid())
        .bind(&doc_types)
        .bind(&jurisdictions)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        rows.iter().map(item_from_row).collect()
    }

    #[instrument(skip(self, items), fields(count = items.len()))]
    async fn insert_many(&self, items: &[ChecklistItem]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(query_failed)?;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO checklist_items
                    (id, tenant_id, doc_type, jurisdiction, industry, text, embedding, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(item.id.as_uuid())
            .bind(item.tenant_id.as_uuid())
            .bind(item.doc_type.as_str())
            .bind(item.jurisdiction.as_str())
            .bind(item.industry.as_str())
            .bind(&item.text)
            .bind(&item.embedding.values)
            .bind(item.created_at)
            .execute(&mut *tx)
            .await
            .map_err(query_failed)?;
        }

        tx.commit().await.map_err(query_failed)?;
        Ok(())
    }

    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    async fn delete_all(&self, tenant_id: TenantId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM checklist_items WHERE tenant_id = $1")
            .bind(tenant_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(result.rows_affected())
    }
}
