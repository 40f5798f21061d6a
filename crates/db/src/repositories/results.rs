//! Results snapshot repository.

use std::sync::Arc;

use crate::entities::{VotingResults, voting_results};
use crate::repositories::map_db_err;
use openballot_common::AppResult;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};

/// Results repository for database operations.
#[derive(Clone)]
pub struct ResultsRepository {
    db: Arc<DatabaseConnection>,
}

impl ResultsRepository {
    /// Create a new results repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find the snapshot for a session.
    pub async fn find_by_session(
        &self,
        session_id: &str,
    ) -> AppResult<Option<voting_results::Model>> {
        VotingResults::find_by_id(session_id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Write a snapshot, replacing any previous one for the session.
    pub async fn upsert(&self, model: voting_results::Model) -> AppResult<voting_results::Model> {
        let existing = self.find_by_session(&model.session_id).await?;

        if existing.is_some() {
            let mut active = model.clone().into_active_model();
            active.generated_at = Set(model.generated_at);
            active.total_votes = Set(model.total_votes);
            active.payload = Set(model.payload.clone());
            active.signature = Set(model.signature.clone());
            active.update(self.db.as_ref()).await.map_err(map_db_err)
        } else {
            model
                .into_active_model()
                .insert(self.db.as_ref())
                .await
                .map_err(map_db_err)
        }
    }

    /// Drop the snapshot for a session.
    pub async fn delete(&self, session_id: &str) -> AppResult<()> {
        VotingResults::delete_by_id(session_id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}
