//! Ballot engine.
//!
//! Validates and records a single voter's choices against the
//! session's active settings. Every rule funnels through here:
//! timing and publication gates, eligibility, selection shape,
//! roster membership, and vote-change handling. Settings are re-read
//! on every call; nothing is cached across requests, so a rule change
//! by an administrator takes effect immediately.

use std::collections::HashSet;

use chrono::Utc;
use openballot_common::{AppError, AppResult, IdGenerator};
use openballot_db::{
    entities::{
        audit_log::AuditAction,
        notification::NotificationKind,
        vote, voting_session, voting_settings,
    },
    repositories::{CandidateRepository, SessionRepository, VoteRepository},
};
use rust_decimal::Decimal;
use sea_orm::Set;
use serde_json::json;

use crate::services::account::AccountService;
use crate::services::audit::{AuditService, Audited};
use crate::services::notification::NotificationService;

/// Ballot engine service.
#[derive(Clone)]
pub struct BallotService {
    session_repo: SessionRepository,
    candidate_repo: CandidateRepository,
    vote_repo: VoteRepository,
    accounts: AccountService,
    audit: AuditService,
    notifications: NotificationService,
    id_gen: IdGenerator,
}

impl BallotService {
    /// Create a new ballot service.
    #[must_use]
    pub const fn new(
        session_repo: SessionRepository,
        candidate_repo: CandidateRepository,
        vote_repo: VoteRepository,
        accounts: AccountService,
        audit: AuditService,
        notifications: NotificationService,
    ) -> Self {
        Self {
            session_repo,
            candidate_repo,
            vote_repo,
            accounts,
            audit,
            notifications,
            id_gen: IdGenerator::new(),
        }
    }

    /// Cast a ballot with the default weight of 1.
    pub async fn cast_vote(
        &self,
        voter_id: Option<&str>,
        session_id: &str,
        candidate_ids: &[String],
    ) -> AppResult<Audited<Vec<vote::Model>>> {
        self.cast_vote_weighted(voter_id, session_id, candidate_ids, Decimal::ONE)
            .await
    }

    /// Cast a ballot with an explicit weight, for weighted schemes.
    ///
    /// Validation short-circuits on the first violated rule; each
    /// rejection names the rule it violated.
    pub async fn cast_vote_weighted(
        &self,
        voter_id: Option<&str>,
        session_id: &str,
        candidate_ids: &[String],
        weight: Decimal,
    ) -> AppResult<Audited<Vec<vote::Model>>> {
        if weight <= Decimal::ZERO {
            return Err(AppError::Validation(
                "Vote weight must be greater than zero".to_string(),
            ));
        }

        let session = self.session_repo.get_by_id(session_id).await?;
        check_session_open(&session)?;

        let settings = self.session_repo.get_settings(session_id).await?;

        self.check_eligibility(voter_id, &settings).await?;

        check_selection_shape(candidate_ids, &settings)?;

        let roster = self.candidate_repo.find_by_session(session_id).await?;
        let roster_ids: Vec<String> = roster.into_iter().map(|c| c.id).collect();
        check_roster_membership(candidate_ids, &roster_ids, session_id)?;

        // One active ballot per voter per session. The prior lookup
        // spans the whole roster, not just the new selection, so a
        // change of heart across candidates is still caught.
        let prior = if let Some(v) = voter_id {
            self.vote_repo.find_active_by_voter(v, &roster_ids).await?
        } else {
            Vec::new()
        };

        if !prior.is_empty() && !settings.allow_vote_change_until_close {
            return Err(AppError::DuplicateVote(format!(
                "A ballot was already cast in session {session_id} and vote changes are not allowed"
            )));
        }

        let now = Utc::now();
        let models: Vec<vote::ActiveModel> = candidate_ids
            .iter()
            .map(|candidate_id| vote::ActiveModel {
                id: Set(self.id_gen.generate()),
                candidate_id: Set(candidate_id.clone()),
                voter_id: Set(voter_id.map(ToString::to_string)),
                cast_at: Set(now.into()),
                weight: Set(weight),
                is_valid: Set(true),
            })
            .collect();

        let votes = if prior.is_empty() {
            self.vote_repo.insert_ballot(models).await?
        } else {
            // Logical supersede: prior rows flip to invalid and the
            // replacement rows land in the same transaction.
            let prior_ids: Vec<String> = prior.into_iter().map(|v| v.id).collect();
            self.vote_repo.supersede_and_insert(&prior_ids, models).await?
        };

        // Anonymity governs disclosure, not duplicate bookkeeping: the
        // vote rows keep voter_id either way, but the event record
        // carries an anonymous marker instead of the identity.
        let (actor, metadata) = if settings.anonymous {
            (
                None,
                json!({ "sessionId": session_id, "candidateIds": candidate_ids, "anonymous": true }),
            )
        } else {
            (
                voter_id,
                json!({ "sessionId": session_id, "candidateIds": candidate_ids }),
            )
        };

        let audit_error = self
            .audit
            .record_best_effort(
                actor,
                AuditAction::CastVote,
                Some("voting_session"),
                Some(session_id),
                Some(metadata),
            )
            .await;

        if let Some(v) = voter_id {
            self.notifications
                .create_best_effort(
                    v,
                    NotificationKind::VoteReceipt,
                    "Your vote has been recorded",
                    Some(&format!("Session: {}", session.title)),
                )
                .await;
        }

        Ok(Audited {
            value: votes,
            audit_error,
        })
    }

    /// Enforce the eligibility gate when the session requires it.
    ///
    /// Eligibility resolution itself belongs to the account layer; the
    /// engine only checks the gate against current account state.
    async fn check_eligibility(
        &self,
        voter_id: Option<&str>,
        settings: &voting_settings::Model,
    ) -> AppResult<()> {
        if !settings.require_confirmed_email {
            return Ok(());
        }

        let Some(voter_id) = voter_id else {
            return Err(AppError::Eligibility(
                "This session requires an identified voter with a confirmed email".to_string(),
            ));
        };

        self.accounts.resolve_eligibility(voter_id).await?;
        Ok(())
    }
}

/// Publication and timing gate.
fn check_session_open(session: &voting_session::Model) -> AppResult<()> {
    if !session.is_published {
        return Err(AppError::SessionNotOpen(format!(
            "Session {} is not published",
            session.id
        )));
    }

    let now = Utc::now();
    if now < session.start_at {
        return Err(AppError::SessionNotOpen(format!(
            "Session {} has not started yet",
            session.id
        )));
    }
    if now > session.end_at {
        return Err(AppError::SessionNotOpen(format!(
            "Session {} has already ended",
            session.id
        )));
    }

    Ok(())
}

/// Selection-size rules: exactly one for single-select, between 1 and
/// `max_choices` for multi-select, no duplicates.
fn check_selection_shape(
    candidate_ids: &[String],
    settings: &voting_settings::Model,
) -> AppResult<()> {
    if candidate_ids.is_empty() {
        return Err(AppError::InvalidSelection(
            "A ballot must select at least one candidate".to_string(),
        ));
    }

    let unique: HashSet<&String> = candidate_ids.iter().collect();
    if unique.len() != candidate_ids.len() {
        return Err(AppError::InvalidSelection(
            "Selection contains the same candidate more than once".to_string(),
        ));
    }

    let max = settings.effective_max_choices();
    if !settings.multi_select && candidate_ids.len() != 1 {
        return Err(AppError::InvalidSelection(
            "A single-select ballot accepts exactly one candidate".to_string(),
        ));
    }
    if candidate_ids.len() > max {
        return Err(AppError::InvalidSelection(format!(
            "Selection exceeds maximum of {max}"
        )));
    }

    Ok(())
}

/// Every selected candidate must belong to the session being voted on.
fn check_roster_membership(
    candidate_ids: &[String],
    roster_ids: &[String],
    session_id: &str,
) -> AppResult<()> {
    let roster: HashSet<&String> = roster_ids.iter().collect();
    for id in candidate_ids {
        if !roster.contains(id) {
            return Err(AppError::InvalidSelection(format!(
                "Candidate {id} does not belong to session {session_id}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;
    use openballot_db::entities::candidate::{self, CandidateKind};
    use openballot_db::entities::user::{self, UserRole, UserStatus};
    use openballot_db::entities::voting_session::Visibility;
    use openballot_db::repositories::{AuditLogRepository, NotificationRepository, UserRepository};
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn open_session(id: &str) -> voting_session::Model {
        let now = Utc::now();
        voting_session::Model {
            id: id.to_string(),
            title: "Board election".to_string(),
            description: None,
            created_by: "admin1".to_string(),
            start_at: (now - Duration::hours(1)).into(),
            end_at: (now + Duration::hours(1)).into(),
            is_published: true,
            visibility: Visibility::Public,
            created_at: now.into(),
        }
    }

    fn ended_session(id: &str) -> voting_session::Model {
        let now = Utc::now();
        let mut session = open_session(id);
        session.start_at = (now - Duration::hours(3)).into();
        session.end_at = (now - Duration::hours(1)).into();
        session
    }

    fn settings(session_id: &str) -> voting_settings::Model {
        voting_settings::Model {
            session_id: session_id.to_string(),
            anonymous: false,
            multi_select: false,
            max_choices: 1,
            require_confirmed_email: false,
            allow_vote_change_until_close: false,
        }
    }

    fn multi_settings(session_id: &str, max_choices: i32) -> voting_settings::Model {
        let mut s = settings(session_id);
        s.multi_select = true;
        s.max_choices = max_choices;
        s
    }

    fn test_candidate(id: &str, session_id: &str) -> candidate::Model {
        candidate::Model {
            id: id.to_string(),
            session_id: session_id.to_string(),
            kind: CandidateKind::Person,
            full_name: format!("Candidate {id}"),
            description: None,
            created_at: Utc::now().into(),
        }
    }

    fn test_vote(id: &str, candidate_id: &str, voter_id: &str) -> vote::Model {
        vote::Model {
            id: id.to_string(),
            candidate_id: candidate_id.to_string(),
            voter_id: Some(voter_id.to_string()),
            cast_at: Utc::now().into(),
            weight: Decimal::ONE,
            is_valid: true,
        }
    }

    fn test_user(id: &str, confirmed: bool) -> user::Model {
        user::Model {
            id: id.to_string(),
            email: format!("{id}@example.org"),
            password_hash: "$argon2id$stub".to_string(),
            full_name: "Voter".to_string(),
            role: UserRole::Voter,
            status: UserStatus::Active,
            email_confirmed: confirmed,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    fn audit_row() -> openballot_db::entities::audit_log::Model {
        openballot_db::entities::audit_log::Model {
            id: "a1".to_string(),
            actor_id: None,
            action: AuditAction::CastVote,
            entity_type: Some("voting_session".to_string()),
            entity_id: Some("s1".to_string()),
            metadata: None,
            created_at: Utc::now().into(),
        }
    }

    fn receipt_row(user_id: &str) -> openballot_db::entities::notification::Model {
        openballot_db::entities::notification::Model {
            id: "n1".to_string(),
            user_id: user_id.to_string(),
            kind: NotificationKind::VoteReceipt,
            title: "Your vote has been recorded".to_string(),
            body: None,
            is_read: false,
            created_at: Utc::now().into(),
        }
    }

    fn empty_conn() -> Arc<DatabaseConnection> {
        Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
    }

    struct Mocks {
        session_db: Arc<DatabaseConnection>,
        candidate_db: Arc<DatabaseConnection>,
        vote_db: Arc<DatabaseConnection>,
        user_db: Arc<DatabaseConnection>,
        audit_db: Arc<DatabaseConnection>,
        notification_db: Arc<DatabaseConnection>,
    }

    impl Mocks {
        fn bare() -> Self {
            Self {
                session_db: empty_conn(),
                candidate_db: empty_conn(),
                vote_db: empty_conn(),
                user_db: empty_conn(),
                audit_db: empty_conn(),
                notification_db: empty_conn(),
            }
        }

        fn into_service(self) -> BallotService {
            BallotService::new(
                SessionRepository::new(self.session_db),
                CandidateRepository::new(self.candidate_db),
                VoteRepository::new(self.vote_db),
                AccountService::new(
                    UserRepository::new(self.user_db),
                    AuditService::new(AuditLogRepository::new(empty_conn())),
                ),
                AuditService::new(AuditLogRepository::new(self.audit_db)),
                NotificationService::new(NotificationRepository::new(self.notification_db)),
            )
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn test_cast_rejects_non_positive_weight() {
        let service = Mocks::bare().into_service();

        let result = service
            .cast_vote_weighted(Some("voter1"), "s1", &ids(&["c1"]), Decimal::ZERO)
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_cast_on_unpublished_session() {
        let mut session = open_session("s1");
        session.is_published = false;

        let mut mocks = Mocks::bare();
        mocks.session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[session]])
                .into_connection(),
        );
        let service = mocks.into_service();

        let result = service.cast_vote(Some("voter1"), "s1", &ids(&["c1"])).await;
        match result {
            Err(AppError::SessionNotOpen(msg)) => assert!(msg.contains("not published")),
            _ => panic!("Expected SessionNotOpen error"),
        }
    }

    #[tokio::test]
    async fn test_cast_after_end_fails_even_when_published() {
        let mut mocks = Mocks::bare();
        mocks.session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[ended_session("s1")]])
                .into_connection(),
        );
        let service = mocks.into_service();

        let result = service.cast_vote(Some("voter1"), "s1", &ids(&["c1"])).await;
        match result {
            Err(AppError::SessionNotOpen(msg)) => assert!(msg.contains("ended")),
            _ => panic!("Expected SessionNotOpen error"),
        }
    }

    #[tokio::test]
    async fn test_cast_on_missing_session() {
        let mut mocks = Mocks::bare();
        mocks.session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<voting_session::Model>::new()])
                .into_connection(),
        );
        let service = mocks.into_service();

        let result = service.cast_vote(Some("voter1"), "s1", &ids(&["c1"])).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_eligibility_gate_requires_identity() {
        let mut s = settings("s1");
        s.require_confirmed_email = true;

        let mut mocks = Mocks::bare();
        mocks.session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[open_session("s1")]])
                .append_query_results([[s]])
                .into_connection(),
        );
        let service = mocks.into_service();

        let result = service.cast_vote(None, "s1", &ids(&["c1"])).await;
        assert!(matches!(result, Err(AppError::Eligibility(_))));
    }

    #[tokio::test]
    async fn test_eligibility_gate_rejects_unconfirmed_email() {
        let mut s = settings("s1");
        s.require_confirmed_email = true;

        let mut mocks = Mocks::bare();
        mocks.session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[open_session("s1")]])
                .append_query_results([[s]])
                .into_connection(),
        );
        mocks.user_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_user("voter1", false)]])
                .into_connection(),
        );
        let service = mocks.into_service();

        let result = service.cast_vote(Some("voter1"), "s1", &ids(&["c1"])).await;
        match result {
            Err(AppError::Eligibility(msg)) => assert!(msg.contains("confirmed")),
            _ => panic!("Expected Eligibility error"),
        }
    }

    #[tokio::test]
    async fn test_single_select_rejects_two_candidates() {
        let mut mocks = Mocks::bare();
        mocks.session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[open_session("s1")]])
                .append_query_results([[settings("s1")]])
                .into_connection(),
        );
        let service = mocks.into_service();

        let result = service
            .cast_vote(Some("voter1"), "s1", &ids(&["c1", "c2"]))
            .await;
        match result {
            Err(AppError::InvalidSelection(msg)) => assert!(msg.contains("exactly one")),
            _ => panic!("Expected InvalidSelection error"),
        }
    }

    #[tokio::test]
    async fn test_multi_select_rejects_selection_over_max() {
        let mut mocks = Mocks::bare();
        mocks.session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[open_session("s1")]])
                .append_query_results([[multi_settings("s1", 2)]])
                .into_connection(),
        );
        let service = mocks.into_service();

        let result = service
            .cast_vote(Some("voter1"), "s1", &ids(&["c1", "c2", "c3"]))
            .await;
        match result {
            Err(AppError::InvalidSelection(msg)) => {
                assert!(msg.contains("maximum of 2"));
            }
            _ => panic!("Expected InvalidSelection error"),
        }
    }

    #[tokio::test]
    async fn test_rejects_duplicate_candidates_in_selection() {
        let mut mocks = Mocks::bare();
        mocks.session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[open_session("s1")]])
                .append_query_results([[multi_settings("s1", 3)]])
                .into_connection(),
        );
        let service = mocks.into_service();

        let result = service
            .cast_vote(Some("voter1"), "s1", &ids(&["c1", "c1"]))
            .await;
        match result {
            Err(AppError::InvalidSelection(msg)) => assert!(msg.contains("more than once")),
            _ => panic!("Expected InvalidSelection error"),
        }
    }

    #[tokio::test]
    async fn test_rejects_candidate_from_other_session() {
        let mut mocks = Mocks::bare();
        mocks.session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[open_session("s1")]])
                .append_query_results([[settings("s1")]])
                .into_connection(),
        );
        mocks.candidate_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_candidate("c1", "s1")]])
                .into_connection(),
        );
        let service = mocks.into_service();

        let result = service
            .cast_vote(Some("voter1"), "s1", &ids(&["intruder"]))
            .await;
        match result {
            Err(AppError::InvalidSelection(msg)) => assert!(msg.contains("does not belong")),
            _ => panic!("Expected InvalidSelection error"),
        }
    }

    #[tokio::test]
    async fn test_second_ballot_rejected_when_change_disallowed() {
        let mut mocks = Mocks::bare();
        mocks.session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[open_session("s1")]])
                .append_query_results([[settings("s1")]])
                .into_connection(),
        );
        mocks.candidate_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_candidate("c1", "s1"), test_candidate("c2", "s1")]])
                .into_connection(),
        );
        mocks.vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_vote("v1", "c1", "voter1")]])
                .into_connection(),
        );
        let service = mocks.into_service();

        let result = service.cast_vote(Some("voter1"), "s1", &ids(&["c2"])).await;
        assert!(matches!(result, Err(AppError::DuplicateVote(_))));
    }

    #[tokio::test]
    async fn test_multi_select_within_max_succeeds() {
        let mut mocks = Mocks::bare();
        mocks.session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[open_session("s1")]])
                .append_query_results([[multi_settings("s1", 2)]])
                .into_connection(),
        );
        mocks.candidate_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[
                    test_candidate("c1", "s1"),
                    test_candidate("c2", "s1"),
                    test_candidate("c3", "s1"),
                ]])
                .into_connection(),
        );
        mocks.vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<vote::Model>::new()])
                .append_query_results([[test_vote("v1", "c1", "voter1")]])
                .append_query_results([[test_vote("v2", "c2", "voter1")]])
                .into_connection(),
        );
        mocks.audit_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[audit_row()]])
                .into_connection(),
        );
        mocks.notification_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[receipt_row("voter1")]])
                .into_connection(),
        );
        let service = mocks.into_service();

        let result = service
            .cast_vote(Some("voter1"), "s1", &ids(&["c1", "c2"]))
            .await
            .unwrap();

        assert_eq!(result.value.len(), 2);
        assert!(result.value.iter().all(|v| v.is_valid));
        assert!(result.audit_error.is_none());
    }

    #[tokio::test]
    async fn test_vote_change_supersedes_prior_ballot() {
        let mut s = settings("s1");
        s.allow_vote_change_until_close = true;

        let mut mocks = Mocks::bare();
        mocks.session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[open_session("s1")]])
                .append_query_results([[s]])
                .into_connection(),
        );
        mocks.candidate_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_candidate("c1", "s1"), test_candidate("c2", "s1")]])
                .into_connection(),
        );
        mocks.vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                // Prior active ballot on c1
                .append_query_results([[test_vote("v1", "c1", "voter1")]])
                // Replacement row on c2 inside the supersede transaction
                .append_query_results([[test_vote("v2", "c2", "voter1")]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );
        mocks.audit_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[audit_row()]])
                .into_connection(),
        );
        mocks.notification_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[receipt_row("voter1")]])
                .into_connection(),
        );
        let service = mocks.into_service();

        let result = service
            .cast_vote(Some("voter1"), "s1", &ids(&["c2"]))
            .await
            .unwrap();

        assert_eq!(result.value.len(), 1);
        assert_eq!(result.value[0].candidate_id, "c2");
        assert!(result.value[0].is_valid);
    }

    #[tokio::test]
    async fn test_anonymous_ballot_without_identity() {
        // Anonymous session, no voter bound: no prior-ballot lookup,
        // no receipt, and the event record carries no actor.
        let mut s = settings("s1");
        s.anonymous = true;

        let mut mocks = Mocks::bare();
        mocks.session_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[open_session("s1")]])
                .append_query_results([[s]])
                .into_connection(),
        );
        mocks.candidate_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_candidate("c1", "s1")]])
                .into_connection(),
        );
        let mut anonymous_vote = test_vote("v1", "c1", "voter1");
        anonymous_vote.voter_id = None;
        mocks.vote_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[anonymous_vote]])
                .into_connection(),
        );
        mocks.audit_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[audit_row()]])
                .into_connection(),
        );
        let service = mocks.into_service();

        let result = service.cast_vote(None, "s1", &ids(&["c1"])).await.unwrap();

        assert_eq!(result.value.len(), 1);
        assert!(result.value[0].voter_id.is_none());
        assert!(result.audit_error.is_none());
    }
}
