//! Audit repository that writes events to tracing output.

use async_trait::async_trait;
use roster_application::{AuditEvent, AuditRepository};
use roster_core::AppResult;
use tokio::sync::RwLock;
use tracing::info;

/// Audit repository that logs every event and keeps it in memory.
#[derive(Debug, Default)]
pub struct TracingAuditRepository {
    events: RwLock<Vec<AuditEvent>>,
}

impl TracingAuditRepository {
    /// Creates an empty audit log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Returns every event appended so far, oldest first.
    pub async fn events(&self) -> Vec<AuditEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl AuditRepository for TracingAuditRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        info!(
            target: "roster::audit",
            company_id = %event.company_id,
            actor_id = %event.actor_id,
            action = event.action.as_str(),
            resource_type = event.resource_type.as_str(),
            resource_id = event.resource_id.as_str(),
            detail = event.detail.as_deref().unwrap_or(""),
            "audit event"
        );

        self.events.write().await.push(event);
        Ok(())
    }
}
