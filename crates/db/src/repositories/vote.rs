//! Vote repository.

use std::sync::Arc;

use crate::entities::{Vote, vote};
use crate::repositories::map_db_err;
use openballot_common::AppResult;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    TransactionTrait,
};

/// Vote repository for database operations.
#[derive(Clone)]
pub struct VoteRepository {
    db: Arc<DatabaseConnection>,
}

impl VoteRepository {
    /// Create a new vote repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Active ballot rows cast by a voter among the given candidates.
    pub async fn find_active_by_voter(
        &self,
        voter_id: &str,
        candidate_ids: &[String],
    ) -> AppResult<Vec<vote::Model>> {
        Vote::find()
            .filter(vote::Column::VoterId.eq(voter_id))
            .filter(vote::Column::CandidateId.is_in(candidate_ids.iter().map(String::as_str)))
            .filter(vote::Column::IsValid.eq(true))
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// All valid ballot rows for the given candidates, in one scan.
    pub async fn find_valid_by_candidates(
        &self,
        candidate_ids: &[String],
    ) -> AppResult<Vec<vote::Model>> {
        Vote::find()
            .filter(vote::Column::CandidateId.is_in(candidate_ids.iter().map(String::as_str)))
            .filter(vote::Column::IsValid.eq(true))
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Whether any vote rows (valid or superseded) exist for the given
    /// candidates. History counts: a superseded ballot still blocks
    /// destructive deletion.
    pub async fn exists_for_candidates(&self, candidate_ids: &[String]) -> AppResult<bool> {
        if candidate_ids.is_empty() {
            return Ok(false);
        }
        let count = Vote::find()
            .filter(vote::Column::CandidateId.is_in(candidate_ids.iter().map(String::as_str)))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(count > 0)
    }

    /// Remove all vote rows for the given candidates. Only reached
    /// after the caller has explicitly authorized a destructive
    /// delete. Returns the number of rows removed.
    pub async fn delete_by_candidates(&self, candidate_ids: &[String]) -> AppResult<u64> {
        if candidate_ids.is_empty() {
            return Ok(0);
        }
        let result = Vote::delete_many()
            .filter(vote::Column::CandidateId.is_in(candidate_ids.iter().map(String::as_str)))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected)
    }

    /// Insert a ballot: one row per selected candidate, atomically.
    pub async fn insert_ballot(
        &self,
        models: Vec<vote::ActiveModel>,
    ) -> AppResult<Vec<vote::Model>> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let mut inserted = Vec::with_capacity(models.len());
        for model in models {
            inserted.push(model.insert(&txn).await.map_err(map_db_err)?);
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(inserted)
    }

    /// Mark prior ballot rows invalid and insert the replacement rows
    /// as one transaction.
    ///
    /// The supersede and the insert must never be observable
    /// separately; two concurrent vote changes must not both see "no
    /// prior ballot" and double-insert.
    pub async fn supersede_and_insert(
        &self,
        prior_ids: &[String],
        models: Vec<vote::ActiveModel>,
    ) -> AppResult<Vec<vote::Model>> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        Vote::update_many()
            .col_expr(vote::Column::IsValid, Expr::value(false))
            .filter(vote::Column::Id.is_in(prior_ids.iter().map(String::as_str)))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let mut inserted = Vec::with_capacity(models.len());
        for model in models {
            inserted.push(model.insert(&txn).await.map_err(map_db_err)?);
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(inserted)
    }
}
