//! Candidate repository.

use std::sync::Arc;

use crate::entities::{Candidate, candidate};
use crate::repositories::map_db_err;
use openballot_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};

/// Candidate repository for database operations.
#[derive(Clone)]
pub struct CandidateRepository {
    db: Arc<DatabaseConnection>,
}

impl CandidateRepository {
    /// Create a new candidate repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a candidate by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<candidate::Model>> {
        Candidate::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Get a candidate by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: &str) -> AppResult<candidate::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Candidate not found: {id}")))
    }

    /// List a session's roster in insertion order.
    pub async fn find_by_session(&self, session_id: &str) -> AppResult<Vec<candidate::Model>> {
        Candidate::find()
            .filter(candidate::Column::SessionId.eq(session_id))
            .order_by_asc(candidate::Column::CreatedAt)
            .order_by_asc(candidate::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Create a new candidate.
    pub async fn create(&self, model: candidate::ActiveModel) -> AppResult<candidate::Model> {
        model.insert(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Update a candidate.
    pub async fn update(&self, model: candidate::ActiveModel) -> AppResult<candidate::Model> {
        model.update(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Delete a candidate.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let candidate = self.get_by_id(id).await?;
        candidate
            .delete(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}
