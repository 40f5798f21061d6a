//! Candidate roster service.

use chrono::Utc;
use openballot_common::{AppError, AppResult, IdGenerator};
use openballot_db::{
    entities::{
        audit_log::AuditAction,
        candidate::{self, CandidateKind},
    },
    repositories::{CandidateRepository, SessionRepository, VoteRepository},
};
use sea_orm::{IntoActiveModel, Set};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::services::audit::{AuditService, Audited};

/// Input for adding a candidate to a session.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCandidateInput {
    pub session_id: String,
    pub kind: CandidateKind,
    #[validate(length(min = 1, max = 256))]
    pub full_name: String,
    #[validate(length(max = 2048))]
    pub description: Option<String>,
}

/// Input for updating a candidate.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidateInput {
    pub candidate_id: String,
    pub kind: Option<CandidateKind>,
    #[validate(length(min = 1, max = 256))]
    pub full_name: Option<String>,
    #[validate(length(max = 2048))]
    pub description: Option<Option<String>>,
}

/// Service for managing a session's candidate roster.
#[derive(Clone)]
pub struct CandidateService {
    candidate_repo: CandidateRepository,
    session_repo: SessionRepository,
    vote_repo: VoteRepository,
    audit: AuditService,
    id_gen: IdGenerator,
}

impl CandidateService {
    /// Create a new candidate service.
    #[must_use]
    pub const fn new(
        candidate_repo: CandidateRepository,
        session_repo: SessionRepository,
        vote_repo: VoteRepository,
        audit: AuditService,
    ) -> Self {
        Self {
            candidate_repo,
            session_repo,
            vote_repo,
            audit,
            id_gen: IdGenerator::new(),
        }
    }

    /// List a session's roster in insertion order.
    pub async fn list(&self, session_id: &str) -> AppResult<Vec<candidate::Model>> {
        self.candidate_repo.find_by_session(session_id).await
    }

    /// Add a candidate to a session.
    pub async fn add(
        &self,
        actor_id: &str,
        input: AddCandidateInput,
    ) -> AppResult<Audited<candidate::Model>> {
        input.validate()?;

        // The target session must exist; roster rows never dangle
        self.session_repo.get_by_id(&input.session_id).await?;

        let model = candidate::ActiveModel {
            id: Set(self.id_gen.generate()),
            session_id: Set(input.session_id.clone()),
            kind: Set(input.kind),
            full_name: Set(input.full_name),
            description: Set(input.description),
            created_at: Set(Utc::now().into()),
        };

        let candidate = self.candidate_repo.create(model).await?;

        let audit_error = self
            .audit
            .record_best_effort(
                Some(actor_id),
                AuditAction::AddCandidate,
                Some("candidate"),
                Some(&candidate.id),
                Some(json!({ "sessionId": input.session_id })),
            )
            .await;

        Ok(Audited {
            value: candidate,
            audit_error,
        })
    }

    /// Update a candidate's display fields.
    pub async fn update(
        &self,
        actor_id: &str,
        input: UpdateCandidateInput,
    ) -> AppResult<Audited<candidate::Model>> {
        input.validate()?;

        let candidate = self.candidate_repo.get_by_id(&input.candidate_id).await?;

        let mut dirty = false;
        let mut active = candidate.clone().into_active_model();
        if let Some(kind) = input.kind {
            active.kind = Set(kind);
            dirty = true;
        }
        if let Some(full_name) = input.full_name {
            active.full_name = Set(full_name);
            dirty = true;
        }
        if let Some(description) = input.description {
            active.description = Set(description);
            dirty = true;
        }

        let candidate = if dirty {
            self.candidate_repo.update(active).await?
        } else {
            candidate
        };

        let audit_error = self
            .audit
            .record_best_effort(
                Some(actor_id),
                AuditAction::UpdateCandidate,
                Some("candidate"),
                Some(&input.candidate_id),
                None,
            )
            .await;

        Ok(Audited {
            value: candidate,
            audit_error,
        })
    }

    /// Remove a candidate from the roster.
    ///
    /// Existing votes block the removal unless `destructive` is set;
    /// the engine never silently cascades ballot history away.
    pub async fn delete(
        &self,
        actor_id: &str,
        candidate_id: &str,
        destructive: bool,
    ) -> AppResult<Audited<()>> {
        let candidate = self.candidate_repo.get_by_id(candidate_id).await?;

        let candidate_ids = vec![candidate.id.clone()];
        if self.vote_repo.exists_for_candidates(&candidate_ids).await? {
            if !destructive {
                return Err(AppError::Conflict(format!(
                    "Candidate {candidate_id} has recorded votes; deletion requires an explicit destructive override"
                )));
            }
            self.vote_repo.delete_by_candidates(&candidate_ids).await?;
        }

        self.candidate_repo.delete(candidate_id).await?;

        let audit_error = self
            .audit
            .record_best_effort(
                Some(actor_id),
                AuditAction::DeleteCandidate,
                Some("candidate"),
                Some(candidate_id),
                Some(json!({ "sessionId": candidate.session_id, "destructive": destructive })),
            )
            .await;

        Ok(Audited {
            value: (),
            audit_error,
        })
    }
}
