//! Session and settings repository.

use std::sync::Arc;

use crate::entities::{VotingSession, VotingSettings, voting_session, voting_settings};
use crate::repositories::map_db_err;
use openballot_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

/// Session repository for database operations.
#[derive(Clone)]
pub struct SessionRepository {
    db: Arc<DatabaseConnection>,
}

impl SessionRepository {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a session by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<voting_session::Model>> {
        VotingSession::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Get a session by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: &str) -> AppResult<voting_session::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session not found: {id}")))
    }

    /// Find the settings row for a session.
    pub async fn find_settings(
        &self,
        session_id: &str,
    ) -> AppResult<Option<voting_settings::Model>> {
        VotingSettings::find_by_id(session_id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Get the settings row for a session, returning an error if absent.
    pub async fn get_settings(&self, session_id: &str) -> AppResult<voting_settings::Model> {
        self.find_settings(session_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Settings not found for session: {session_id}")))
    }

    /// List published sessions, newest first.
    pub async fn list_published(&self) -> AppResult<Vec<voting_session::Model>> {
        VotingSession::find()
            .filter(voting_session::Column::IsPublished.eq(true))
            .order_by_desc(voting_session::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// List every session regardless of state, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<voting_session::Model>> {
        VotingSession::find()
            .order_by_desc(voting_session::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// List sessions created by a given administrator, newest first.
    pub async fn list_by_creator(&self, creator_id: &str) -> AppResult<Vec<voting_session::Model>> {
        VotingSession::find()
            .filter(voting_session::Column::CreatedBy.eq(creator_id))
            .order_by_desc(voting_session::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Insert a session and its settings as one atomic unit.
    ///
    /// A session must never be observably persisted without settings.
    pub async fn create_with_settings(
        &self,
        session: voting_session::ActiveModel,
        settings: voting_settings::ActiveModel,
    ) -> AppResult<(voting_session::Model, voting_settings::Model)> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let session = session.insert(&txn).await.map_err(map_db_err)?;
        let settings = settings.insert(&txn).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok((session, settings))
    }

    /// Update a session.
    pub async fn update(
        &self,
        model: voting_session::ActiveModel,
    ) -> AppResult<voting_session::Model> {
        model.update(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Update a session's settings row.
    pub async fn update_settings(
        &self,
        model: voting_settings::ActiveModel,
    ) -> AppResult<voting_settings::Model> {
        model.update(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Delete a session; settings and candidates cascade at the schema
    /// level.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let session = self.get_by_id(id).await?;
        session.delete(self.db.as_ref()).await.map_err(map_db_err)?;
        Ok(())
    }
}
