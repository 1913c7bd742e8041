use async_trait::async_trait;
use roster_core::{AppResult, CompanyId, UserId};
use roster_domain::AuditAction;

/// Immutable audit event payload emitted by membership use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Company scope for the event.
    pub company_id: CompanyId,
    /// User that performed the action.
    pub actor_id: UserId,
    /// Stable audit action identifier.
    pub action: AuditAction,
    /// Resource type label.
    pub resource_type: String,
    /// Resource identifier.
    pub resource_id: String,
    /// Optional audit detail payload.
    pub detail: Option<String>,
}

/// Port for persisting append-only audit events.
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Persists one audit event.
    async fn append_event(&self, event: AuditEvent) -> AppResult<()>;
}
