//! Session lifecycle service.
//!
//! Owns the `Draft -> Published -> Closed` state machine. `Closed` is
//! derived from the clock and the stored schedule on every read; it is
//! never stored, so no background job is needed to flip it.

use chrono::{DateTime, Utc};
use openballot_common::{AppError, AppResult, IdGenerator};
use openballot_db::{
    entities::{
        audit_log::AuditAction,
        notification::NotificationKind,
        voting_session::{self, Visibility},
        voting_settings,
    },
    repositories::{CandidateRepository, SessionRepository, VoteRepository},
};
use sea_orm::{IntoActiveModel, Set};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::services::audit::{AuditService, Audited};
use crate::services::notification::NotificationService;

/// Derived lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Unpublished; visible only to its creator and administrators.
    Draft,
    /// Published and not yet past its end bound.
    Published,
    /// Published and past `end_at`. Never stored.
    Closed,
}

/// Compute the lifecycle phase of a session at a given instant.
///
/// There is no `Published -> Draft` transition; publishing is one-way.
#[must_use]
pub fn phase_at(session: &voting_session::Model, now: DateTime<Utc>) -> SessionPhase {
    if !session.is_published {
        SessionPhase::Draft
    } else if now > session.end_at {
        SessionPhase::Closed
    } else {
        SessionPhase::Published
    }
}

/// A session together with its settings row.
#[derive(Debug, Clone)]
pub struct SessionWithSettings {
    /// The session row.
    pub session: voting_session::Model,
    /// The session's ballot rules.
    pub settings: voting_settings::Model,
}

/// Ballot rules supplied when creating or updating a session.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SettingsInput {
    #[serde(default = "default_true")]
    pub anonymous: bool,
    #[serde(default)]
    pub multi_select: bool,
    #[serde(default = "default_max_choices")]
    pub max_choices: i32,
    #[serde(default)]
    pub require_confirmed_email: bool,
    #[serde(default)]
    pub allow_vote_change_until_close: bool,
}

const fn default_true() -> bool {
    true
}

const fn default_max_choices() -> i32 {
    1
}

/// Input for creating a session.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionInput {
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    #[validate(length(max = 2048))]
    pub description: Option<String>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub visibility: Visibility,
    #[validate(nested)]
    pub settings: SettingsInput,
}

/// Input for updating a session.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionInput {
    pub session_id: String,
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,
    #[validate(length(max = 2048))]
    pub description: Option<Option<String>>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub visibility: Option<Visibility>,
    pub settings: Option<SettingsInput>,
}

/// Service for managing the session lifecycle.
#[derive(Clone)]
pub struct SessionService {
    session_repo: SessionRepository,
    candidate_repo: CandidateRepository,
    vote_repo: VoteRepository,
    audit: AuditService,
    notifications: NotificationService,
    id_gen: IdGenerator,
    /// When set, structural edits to a published session are rejected
    /// instead of being delegated to the caller's authorization layer.
    lock_published: bool,
}

impl SessionService {
    /// Create a new session service.
    #[must_use]
    pub const fn new(
        session_repo: SessionRepository,
        candidate_repo: CandidateRepository,
        vote_repo: VoteRepository,
        audit: AuditService,
        notifications: NotificationService,
        lock_published: bool,
    ) -> Self {
        Self {
            session_repo,
            candidate_repo,
            vote_repo,
            audit,
            notifications,
            id_gen: IdGenerator::new(),
            lock_published,
        }
    }

    /// Get a session with its settings.
    pub async fn get_with_settings(&self, id: &str) -> AppResult<SessionWithSettings> {
        let session = self.session_repo.get_by_id(id).await?;
        let settings = self.session_repo.get_settings(id).await?;
        Ok(SessionWithSettings { session, settings })
    }

    /// List published sessions, newest first.
    pub async fn list_published(&self) -> AppResult<Vec<voting_session::Model>> {
        self.session_repo.list_published().await
    }

    /// List every session for administrative views, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<voting_session::Model>> {
        self.session_repo.list_all().await
    }

    /// List sessions created by a given administrator, newest first.
    pub async fn list_by_creator(&self, creator_id: &str) -> AppResult<Vec<voting_session::Model>> {
        self.session_repo.list_by_creator(creator_id).await
    }

    /// Create a session in draft state with its settings, atomically.
    pub async fn create(
        &self,
        actor_id: &str,
        input: CreateSessionInput,
    ) -> AppResult<Audited<SessionWithSettings>> {
        input.validate()?;
        validate_schedule(input.start_at, input.end_at)?;
        validate_settings(&input.settings)?;

        let id = self.id_gen.generate();
        let session = voting_session::ActiveModel {
            id: Set(id.clone()),
            title: Set(input.title),
            description: Set(input.description),
            created_by: Set(actor_id.to_string()),
            start_at: Set(input.start_at.into()),
            end_at: Set(input.end_at.into()),
            is_published: Set(false),
            visibility: Set(input.visibility),
            created_at: Set(Utc::now().into()),
        };
        let settings = voting_settings::ActiveModel {
            session_id: Set(id.clone()),
            anonymous: Set(input.settings.anonymous),
            multi_select: Set(input.settings.multi_select),
            max_choices: Set(input.settings.max_choices),
            require_confirmed_email: Set(input.settings.require_confirmed_email),
            allow_vote_change_until_close: Set(input.settings.allow_vote_change_until_close),
        };

        let (session, settings) = self
            .session_repo
            .create_with_settings(session, settings)
            .await?;

        let audit_error = self
            .audit
            .record_best_effort(
                Some(actor_id),
                AuditAction::CreateSession,
                Some("voting_session"),
                Some(&id),
                Some(json!({ "title": session.title.clone() })),
            )
            .await;

        Ok(Audited {
            value: SessionWithSettings { session, settings },
            audit_error,
        })
    }

    /// Rewrite schedule, visibility and/or settings of a session.
    ///
    /// The derived `Closed` phase is recomputed on read; this method
    /// does not gate on it.
    pub async fn update(
        &self,
        actor_id: &str,
        input: UpdateSessionInput,
    ) -> AppResult<Audited<SessionWithSettings>> {
        input.validate()?;

        let session = self.session_repo.get_by_id(&input.session_id).await?;

        if self.lock_published && session.is_published {
            return Err(AppError::Conflict(format!(
                "Session {} is published and structural edits are locked",
                input.session_id
            )));
        }

        let start = input
            .start_at
            .unwrap_or_else(|| session.start_at.with_timezone(&Utc));
        let end = input
            .end_at
            .unwrap_or_else(|| session.end_at.with_timezone(&Utc));
        validate_schedule(start, end)?;

        if let Some(ref settings) = input.settings {
            validate_settings(settings)?;
        }

        let mut dirty = false;
        let mut active = session.clone().into_active_model();
        if let Some(title) = input.title {
            active.title = Set(title);
            dirty = true;
        }
        if let Some(description) = input.description {
            active.description = Set(description);
            dirty = true;
        }
        if let Some(start_at) = input.start_at {
            active.start_at = Set(start_at.into());
            dirty = true;
        }
        if let Some(end_at) = input.end_at {
            active.end_at = Set(end_at.into());
            dirty = true;
        }
        if let Some(visibility) = input.visibility {
            active.visibility = Set(visibility);
            dirty = true;
        }

        let session = if dirty {
            self.session_repo.update(active).await?
        } else {
            session
        };

        let settings = self.session_repo.get_settings(&input.session_id).await?;
        let settings = if let Some(new_settings) = input.settings {
            let mut active = settings.into_active_model();
            active.anonymous = Set(new_settings.anonymous);
            active.multi_select = Set(new_settings.multi_select);
            active.max_choices = Set(new_settings.max_choices);
            active.require_confirmed_email = Set(new_settings.require_confirmed_email);
            active.allow_vote_change_until_close = Set(new_settings.allow_vote_change_until_close);
            self.session_repo.update_settings(active).await?
        } else {
            settings
        };

        let audit_error = self
            .audit
            .record_best_effort(
                Some(actor_id),
                AuditAction::UpdateSession,
                Some("voting_session"),
                Some(&input.session_id),
                None,
            )
            .await;

        Ok(Audited {
            value: SessionWithSettings { session, settings },
            audit_error,
        })
    }

    /// Publish a session, making it visible to eligible voters.
    ///
    /// Idempotent: publishing an already-published session is a no-op,
    /// not an error, and emits no event.
    pub async fn publish(
        &self,
        actor_id: &str,
        id: &str,
    ) -> AppResult<Audited<voting_session::Model>> {
        let session = self.session_repo.get_by_id(id).await?;

        if session.is_published {
            return Ok(Audited::clean(session));
        }

        let mut active = session.clone().into_active_model();
        active.is_published = Set(true);
        let session = self.session_repo.update(active).await?;

        let audit_error = self
            .audit
            .record_best_effort(
                Some(actor_id),
                AuditAction::PublishSession,
                Some("voting_session"),
                Some(id),
                None,
            )
            .await;

        self.notifications
            .create_best_effort(
                &session.created_by,
                NotificationKind::SessionPublished,
                &format!("Session \"{}\" is now published", session.title),
                None,
            )
            .await;

        Ok(Audited {
            value: session,
            audit_error,
        })
    }

    /// Delete a session, cascading settings and candidates.
    ///
    /// Recorded votes block deletion unless `destructive` is set; the
    /// engine signals the conflict and the override decision belongs
    /// to the caller.
    pub async fn delete(
        &self,
        actor_id: &str,
        id: &str,
        destructive: bool,
    ) -> AppResult<Audited<()>> {
        let session = self.session_repo.get_by_id(id).await?;

        let candidates = self.candidate_repo.find_by_session(id).await?;
        let candidate_ids: Vec<String> = candidates.into_iter().map(|c| c.id).collect();

        if self.vote_repo.exists_for_candidates(&candidate_ids).await? {
            if !destructive {
                return Err(AppError::Conflict(format!(
                    "Session {id} has recorded votes; deletion requires an explicit destructive override"
                )));
            }
            self.vote_repo.delete_by_candidates(&candidate_ids).await?;
        }

        self.session_repo.delete(id).await?;

        let audit_error = self
            .audit
            .record_best_effort(
                Some(actor_id),
                AuditAction::DeleteSession,
                Some("voting_session"),
                Some(id),
                Some(json!({ "title": session.title, "destructive": destructive })),
            )
            .await;

        Ok(Audited {
            value: (),
            audit_error,
        })
    }
}

/// The schedule invariant: a session always ends after it starts.
fn validate_schedule(start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> AppResult<()> {
    if end_at <= start_at {
        return Err(AppError::Validation(
            "end_at must be after start_at".to_string(),
        ));
    }
    Ok(())
}

fn validate_settings(settings: &SettingsInput) -> AppResult<()> {
    if settings.multi_select && settings.max_choices < 1 {
        return Err(AppError::Validation(
            "max_choices must be at least 1 for a multi-select session".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;
    use openballot_db::entities::candidate::{self, CandidateKind};
    use openballot_db::repositories::{AuditLogRepository, NotificationRepository};
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn test_session(id: &str, published: bool) -> voting_session::Model {
        let now = Utc::now();
        voting_session::Model {
            id: id.to_string(),
            title: "Board election".to_string(),
            description: None,
            created_by: "admin1".to_string(),
            start_at: (now - Duration::hours(1)).into(),
            end_at: (now + Duration::hours(1)).into(),
            is_published: published,
            visibility: Visibility::Private,
            created_at: now.into(),
        }
    }

    fn test_settings(session_id: &str) -> voting_settings::Model {
        voting_settings::Model {
            session_id: session_id.to_string(),
            anonymous: true,
            multi_select: false,
            max_choices: 1,
            require_confirmed_email: false,
            allow_vote_change_until_close: false,
        }
    }

    fn test_candidate(id: &str, session_id: &str) -> candidate::Model {
        candidate::Model {
            id: id.to_string(),
            session_id: session_id.to_string(),
            kind: CandidateKind::Person,
            full_name: "Jordan Doe".to_string(),
            description: None,
            created_at: Utc::now().into(),
        }
    }

    fn settings_input() -> SettingsInput {
        SettingsInput {
            anonymous: true,
            multi_select: false,
            max_choices: 1,
            require_confirmed_email: false,
            allow_vote_change_until_close: false,
        }
    }

    fn empty_conn() -> Arc<DatabaseConnection> {
        Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
    }

    fn service_with(
        session_db: Arc<DatabaseConnection>,
        candidate_db: Arc<DatabaseConnection>,
        vote_db: Arc<DatabaseConnection>,
        audit_db: Arc<DatabaseConnection>,
        notification_db: Arc<DatabaseConnection>,
        lock_published: bool,
    ) -> SessionService {
        SessionService::new(
            SessionRepository::new(session_db),
            CandidateRepository::new(candidate_db),
            VoteRepository::new(vote_db),
            AuditService::new(AuditLogRepository::new(audit_db)),
            NotificationService::new(NotificationRepository::new(notification_db)),
            lock_published,
        )
    }

    #[test]
    fn test_phase_draft_until_published() {
        let session = test_session("s1", false);
        assert_eq!(phase_at(&session, Utc::now()), SessionPhase::Draft);
        // Even past end_at an unpublished session stays a draft
        assert_eq!(
            phase_at(&session, Utc::now() + Duration::days(7)),
            SessionPhase::Draft
        );
    }

    #[test]
    fn test_phase_published_within_window() {
        let session = test_session("s1", true);
        assert_eq!(phase_at(&session, Utc::now()), SessionPhase::Published);
    }

    #[test]
    fn test_phase_closed_is_derived_from_clock() {
        let session = test_session("s1", true);
        assert_eq!(
            phase_at(&session, Utc::now() + Duration::hours(2)),
            SessionPhase::Closed
        );
    }

    #[tokio::test]
    async fn test_create_rejects_inverted_schedule() {
        let service = service_with(
            empty_conn(),
            empty_conn(),
            empty_conn(),
            empty_conn(),
            empty_conn(),
            false,
        );

        let now = Utc::now();
        let result = service
            .create(
                "admin1",
                CreateSessionInput {
                    title: "Board election".to_string(),
                    description: None,
                    start_at: now,
                    end_at: now - Duration::hours(1),
                    visibility: Visibility::Private,
                    settings: settings_input(),
                },
            )
            .await;

        match result {
            Err(AppError::Validation(msg)) => assert!(msg.contains("end_at")),
            _ => panic!("Expected Validation error"),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_zero_max_choices_for_multi_select() {
        let service = service_with(
            empty_conn(),
            empty_conn(),
            empty_conn(),
            empty_conn(),
            empty_conn(),
            false,
        );

        let now = Utc::now();
        let mut settings = settings_input();
        settings.multi_select = true;
        settings.max_choices = 0;

        let result = service
            .create(
                "admin1",
                CreateSessionInput {
                    title: "Board election".to_string(),
                    description: None,
                    start_at: now,
                    end_at: now + Duration::hours(1),
                    visibility: Visibility::Private,
                    settings,
                },
            )
            .await;

        match result {
            Err(AppError::Validation(msg)) => assert!(msg.contains("max_choices")),
            _ => panic!("Expected Validation error"),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let service = service_with(
            empty_conn(),
            empty_conn(),
            empty_conn(),
            empty_conn(),
            empty_conn(),
            false,
        );

        let now = Utc::now();
        let result = service
            .create(
                "admin1",
                CreateSessionInput {
                    title: String::new(),
                    description: None,
                    start_at: now,
                    end_at: now + Duration::hours(1),
                    visibility: Visibility::Private,
                    settings: settings_input(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_writes_session_and_settings() {
        let session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_session("s1", false)]])
                .append_query_results([[test_settings("s1")]])
                .into_connection(),
        );
        let audit_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[openballot_db::entities::audit_log::Model {
                    id: "a1".to_string(),
                    actor_id: Some("admin1".to_string()),
                    action: AuditAction::CreateSession,
                    entity_type: Some("voting_session".to_string()),
                    entity_id: Some("s1".to_string()),
                    metadata: None,
                    created_at: Utc::now().into(),
                }]])
                .into_connection(),
        );
        let service = service_with(
            session_db,
            empty_conn(),
            empty_conn(),
            audit_db,
            empty_conn(),
            false,
        );

        let now = Utc::now();
        let result = service
            .create(
                "admin1",
                CreateSessionInput {
                    title: "Board election".to_string(),
                    description: None,
                    start_at: now,
                    end_at: now + Duration::hours(1),
                    visibility: Visibility::Private,
                    settings: settings_input(),
                },
            )
            .await
            .unwrap();

        assert!(!result.value.session.is_published);
        assert_eq!(result.value.settings.max_choices, 1);
        assert!(result.audit_error.is_none());
    }

    #[tokio::test]
    async fn test_publish_transitions_draft() {
        let session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_session("s1", false)]])
                .append_query_results([[test_session("s1", true)]])
                .into_connection(),
        );
        let audit_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[openballot_db::entities::audit_log::Model {
                    id: "a1".to_string(),
                    actor_id: Some("admin1".to_string()),
                    action: AuditAction::PublishSession,
                    entity_type: Some("voting_session".to_string()),
                    entity_id: Some("s1".to_string()),
                    metadata: None,
                    created_at: Utc::now().into(),
                }]])
                .into_connection(),
        );
        let notification_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[openballot_db::entities::notification::Model {
                    id: "n1".to_string(),
                    user_id: "admin1".to_string(),
                    kind: NotificationKind::SessionPublished,
                    title: "Session \"Board election\" is now published".to_string(),
                    body: None,
                    is_read: false,
                    created_at: Utc::now().into(),
                }]])
                .into_connection(),
        );
        let service = service_with(
            session_db,
            empty_conn(),
            empty_conn(),
            audit_db,
            notification_db,
            false,
        );

        let result = service.publish("admin1", "s1").await.unwrap();
        assert!(result.value.is_published);
        assert!(result.audit_error.is_none());
    }

    #[tokio::test]
    async fn test_publish_is_idempotent() {
        // Already published: no update, no event. The audit mock has no
        // appended results, so any accidental emission would surface as
        // an audit_error.
        let session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_session("s1", true)]])
                .into_connection(),
        );
        let service = service_with(
            session_db,
            empty_conn(),
            empty_conn(),
            empty_conn(),
            empty_conn(),
            false,
        );

        let result = service.publish("admin1", "s1").await.unwrap();
        assert!(result.value.is_published);
        assert!(result.audit_error.is_none());
    }

    #[tokio::test]
    async fn test_publish_missing_session() {
        let session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<voting_session::Model>::new()])
                .into_connection(),
        );
        let service = service_with(
            session_db,
            empty_conn(),
            empty_conn(),
            empty_conn(),
            empty_conn(),
            false,
        );

        let result = service.publish("admin1", "missing").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_locked_when_published_and_policy_set() {
        let session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_session("s1", true)]])
                .into_connection(),
        );
        let service = service_with(
            session_db,
            empty_conn(),
            empty_conn(),
            empty_conn(),
            empty_conn(),
            true,
        );

        let result = service
            .update(
                "admin1",
                UpdateSessionInput {
                    session_id: "s1".to_string(),
                    title: Some("Renamed".to_string()),
                    description: None,
                    start_at: None,
                    end_at: None,
                    visibility: None,
                    settings: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_merged_inverted_schedule() {
        // Only end_at is supplied; it lands before the stored start_at
        let session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_session("s1", false)]])
                .into_connection(),
        );
        let service = service_with(
            session_db,
            empty_conn(),
            empty_conn(),
            empty_conn(),
            empty_conn(),
            false,
        );

        let result = service
            .update(
                "admin1",
                UpdateSessionInput {
                    session_id: "s1".to_string(),
                    title: None,
                    description: None,
                    start_at: None,
                    end_at: Some(Utc::now() - chrono::Duration::hours(2)),
                    visibility: None,
                    settings: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_with_votes_requires_override() {
        let session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_session("s1", true)]])
                .into_connection(),
        );
        let candidate_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_candidate("c1", "s1")]])
                .into_connection(),
        );
        let vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[maplit::btreemap! {
                    "num_items" => sea_orm::Value::BigInt(Some(3))
                }]])
                .into_connection(),
        );
        let service = service_with(
            session_db,
            candidate_db,
            vote_db,
            empty_conn(),
            empty_conn(),
            false,
        );

        let result = service.delete("admin1", "s1", false).await;
        match result {
            Err(AppError::Conflict(msg)) => assert!(msg.contains("destructive")),
            _ => panic!("Expected Conflict error"),
        }
    }

    #[tokio::test]
    async fn test_delete_without_votes_succeeds() {
        let session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_session("s1", false)]])
                .append_query_results([[test_session("s1", false)]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );
        let candidate_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<candidate::Model>::new()])
                .into_connection(),
        );
        let audit_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[openballot_db::entities::audit_log::Model {
                    id: "a1".to_string(),
                    actor_id: Some("admin1".to_string()),
                    action: AuditAction::DeleteSession,
                    entity_type: Some("voting_session".to_string()),
                    entity_id: Some("s1".to_string()),
                    metadata: None,
                    created_at: Utc::now().into(),
                }]])
                .into_connection(),
        );
        let service = service_with(
            session_db,
            candidate_db,
            empty_conn(),
            audit_db,
            empty_conn(),
            false,
        );

        let result = service.delete("admin1", "s1", false).await.unwrap();
        assert!(result.audit_error.is_none());
    }
}
