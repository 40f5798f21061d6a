//! Notification service.

use chrono::Utc;
use openballot_common::{AppResult, IdGenerator};
use openballot_db::{
    entities::notification::{self, NotificationKind},
    repositories::NotificationRepository,
};
use sea_orm::Set;

/// Notification service for business logic.
#[derive(Clone)]
pub struct NotificationService {
    notification_repo: NotificationRepository,
    id_gen: IdGenerator,
}

impl NotificationService {
    /// Create a new notification service.
    #[must_use]
    pub const fn new(notification_repo: NotificationRepository) -> Self {
        Self {
            notification_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Create a notification for a user.
    pub async fn create(
        &self,
        user_id: &str,
        kind: NotificationKind,
        title: &str,
        body: Option<&str>,
    ) -> AppResult<notification::Model> {
        let model = notification::ActiveModel {
            id: Set(self.id_gen.generate()),
            user_id: Set(user_id.to_string()),
            kind: Set(kind),
            title: Set(title.to_string()),
            body: Set(body.map(ToString::to_string)),
            is_read: Set(false),
            created_at: Set(Utc::now().into()),
        };

        self.notification_repo.create(model).await
    }

    /// Create a notification, logging instead of failing.
    ///
    /// Notification delivery is outside the consistency boundary of
    /// the domain mutation that triggered it.
    pub async fn create_best_effort(
        &self,
        user_id: &str,
        kind: NotificationKind,
        title: &str,
        body: Option<&str>,
    ) {
        if let Err(e) = self.create(user_id, kind, title, body).await {
            tracing::warn!(error = %e, user_id = user_id, "Failed to create notification");
        }
    }

    /// Get notifications for a user.
    pub async fn list(
        &self,
        user_id: &str,
        limit: u64,
        until_id: Option<&str>,
        unread_only: bool,
    ) -> AppResult<Vec<notification::Model>> {
        self.notification_repo
            .find_by_user(user_id, limit, until_id, unread_only)
            .await
    }

    /// Mark a notification as read.
    pub async fn mark_as_read(&self, user_id: &str, notification_id: &str) -> AppResult<()> {
        // Verify the notification belongs to the user
        let notification = self.notification_repo.find_by_id(notification_id).await?;
        if notification.is_some_and(|n| n.user_id == user_id) {
            self.notification_repo.mark_as_read(notification_id).await?;
        }
        Ok(())
    }

    /// Mark all notifications as read for a user.
    pub async fn mark_all_as_read(&self, user_id: &str) -> AppResult<u64> {
        self.notification_repo.mark_all_as_read(user_id).await
    }

    /// Count unread notifications for a user.
    pub async fn count_unread(&self, user_id: &str) -> AppResult<u64> {
        self.notification_repo.count_unread(user_id).await
    }

    /// Delete a notification.
    pub async fn delete(&self, user_id: &str, notification_id: &str) -> AppResult<()> {
        let notification = self.notification_repo.find_by_id(notification_id).await?;
        if notification.is_some_and(|n| n.user_id == user_id) {
            self.notification_repo.delete(notification_id).await?;
        }
        Ok(())
    }
}
