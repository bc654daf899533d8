use chrono::{DateTime, Utc};
use serde::Serialize;

use super::TenantId;

pub const POLICY_AUDIT_EVENT: &str = "policy_audit";

/// Cost record emitted alongside every completed audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageEvent {
    pub tenant_id: TenantId,
    pub event_type: String,
    pub units: u32,
    pub unit_cost: f64,
    pub total_cost: f64,
    pub matched: usize,
    pub gaps: usize,
    pub created_at: DateTime<Utc>,
}

impl UsageEvent {
    pub fn policy_audit(tenant_id: TenantId, unit_cost: f64, matched: usize, gaps: usize) -> Self {
        Self {
            tenant_id,
            event_type: POLICY_AUDIT_EVENT.to_string(),
            units: 1,
            unit_cost,
            total_cost: unit_cost,
            matched,
            gaps,
            created_at: Utc::now(),
        }
    }
}
