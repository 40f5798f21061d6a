//! Audit sink service.
//!
//! Every mutating domain operation emits exactly one event record
//! before returning success. Emission is best-effort telemetry: a
//! failed write never rolls back the domain mutation, but the failure
//! is surfaced to the caller through [`Audited`].

use chrono::Utc;
use openballot_common::{AppResult, IdGenerator};
use openballot_db::{
    entities::audit_log::{self, AuditAction},
    repositories::AuditLogRepository,
};
use sea_orm::Set;

/// Outcome of a mutating operation together with the audit status.
///
/// `audit_error` is `None` when the event record was persisted, and
/// carries the failure message when it was not.
#[derive(Debug)]
pub struct Audited<T> {
    /// The operation's result value.
    pub value: T,
    /// Set when the audit event could not be recorded.
    pub audit_error: Option<String>,
}

impl<T> Audited<T> {
    /// Wrap a value whose audit event was recorded successfully.
    #[must_use]
    pub const fn clean(value: T) -> Self {
        Self {
            value,
            audit_error: None,
        }
    }
}

/// Audit service for recording domain events.
#[derive(Clone)]
pub struct AuditService {
    audit_repo: AuditLogRepository,
    id_gen: IdGenerator,
}

impl AuditService {
    /// Create a new audit service.
    #[must_use]
    pub const fn new(audit_repo: AuditLogRepository) -> Self {
        Self {
            audit_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Record a domain event.
    pub async fn record(
        &self,
        actor_id: Option<&str>,
        action: AuditAction,
        entity_type: Option<&str>,
        entity_id: Option<&str>,
        metadata: Option<serde_json::Value>,
    ) -> AppResult<audit_log::Model> {
        let model = audit_log::ActiveModel {
            id: Set(self.id_gen.generate()),
            actor_id: Set(actor_id.map(ToString::to_string)),
            action: Set(action),
            entity_type: Set(entity_type.map(ToString::to_string)),
            entity_id: Set(entity_id.map(ToString::to_string)),
            metadata: Set(metadata),
            created_at: Set(Utc::now().into()),
        };

        self.audit_repo.create(model).await
    }

    /// Record a domain event without failing the surrounding operation.
    ///
    /// Returns the failure message when the event could not be
    /// persisted, for the caller to attach to its [`Audited`] outcome.
    pub async fn record_best_effort(
        &self,
        actor_id: Option<&str>,
        action: AuditAction,
        entity_type: Option<&str>,
        entity_id: Option<&str>,
        metadata: Option<serde_json::Value>,
    ) -> Option<String> {
        match self
            .record(actor_id, action, entity_type, entity_id, metadata)
            .await
        {
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, action = ?action, "Failed to record audit event");
                Some(e.to_string())
            }
        }
    }

    /// Recent events, newest first.
    pub async fn recent(&self, limit: u64) -> AppResult<Vec<audit_log::Model>> {
        self.audit_repo.find_recent(limit).await
    }

    /// Events recorded for a given actor, newest first.
    pub async fn by_actor(&self, actor_id: &str, limit: u64) -> AppResult<Vec<audit_log::Model>> {
        self.audit_repo.find_by_actor(actor_id, limit).await
    }
}
