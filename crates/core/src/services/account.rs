//! Account service.
//!
//! Registration and account state management. Eligibility for
//! confirmed-email sessions resolves against the state managed here;
//! the ballot engine only enforces the gate.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use openballot_common::{AppError, AppResult, IdGenerator};
use openballot_db::{
    entities::{
        audit_log::AuditAction,
        user::{self, UserRole, UserStatus},
    },
    repositories::UserRepository,
};
use sea_orm::{IntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

use crate::services::audit::{AuditService, Audited};

/// Input for registering a new account.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[validate(length(min = 1, max = 256))]
    pub full_name: String,
    pub role: Option<UserRole>,
}

/// Input for updating an account.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    pub user_id: String,
    #[validate(length(min = 1, max = 256))]
    pub full_name: Option<String>,
    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

/// Account service for business logic.
#[derive(Clone)]
pub struct AccountService {
    user_repo: UserRepository,
    audit: AuditService,
    id_gen: IdGenerator,
}

impl AccountService {
    /// Create a new account service.
    #[must_use]
    pub const fn new(user_repo: UserRepository, audit: AuditService) -> Self {
        Self {
            user_repo,
            audit,
            id_gen: IdGenerator::new(),
        }
    }

    /// Get an account by ID.
    pub async fn get_by_id(&self, id: &str) -> AppResult<user::Model> {
        self.user_repo.get_by_id(id).await
    }

    /// Register a new account.
    pub async fn register(&self, input: RegisterUserInput) -> AppResult<Audited<user::Model>> {
        input.validate()?;

        if self.user_repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Email {} is already registered",
                input.email
            )));
        }

        let id = self.id_gen.generate();
        let model = user::ActiveModel {
            id: Set(id.clone()),
            email: Set(input.email),
            password_hash: Set(hash_password(&input.password)?),
            full_name: Set(input.full_name),
            role: Set(input.role.unwrap_or(UserRole::Voter)),
            status: Set(UserStatus::Active),
            email_confirmed: Set(false),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
        };

        let account = self.user_repo.create(model).await?;

        let audit_error = self
            .audit
            .record_best_effort(
                Some(&id),
                AuditAction::RegisterUser,
                Some("user"),
                Some(&id),
                None,
            )
            .await;

        Ok(Audited {
            value: account,
            audit_error,
        })
    }

    /// Update an account.
    pub async fn update(
        &self,
        actor_id: &str,
        input: UpdateUserInput,
    ) -> AppResult<Audited<user::Model>> {
        input.validate()?;

        let account = self.user_repo.get_by_id(&input.user_id).await?;

        let mut active = account.into_active_model();
        if let Some(full_name) = input.full_name {
            active.full_name = Set(full_name);
        }
        if let Some(password) = input.password {
            active.password_hash = Set(hash_password(&password)?);
        }
        if let Some(role) = input.role {
            active.role = Set(role);
        }
        if let Some(status) = input.status {
            active.status = Set(status);
        }
        active.updated_at = Set(Some(Utc::now().into()));

        let account = self.user_repo.update(active).await?;

        let audit_error = self
            .audit
            .record_best_effort(
                Some(actor_id),
                AuditAction::UpdateUser,
                Some("user"),
                Some(&input.user_id),
                None,
            )
            .await;

        Ok(Audited {
            value: account,
            audit_error,
        })
    }

    /// Mark an account's email address as confirmed.
    pub async fn confirm_email(&self, user_id: &str) -> AppResult<Audited<user::Model>> {
        let account = self.user_repo.get_by_id(user_id).await?;

        if account.email_confirmed {
            return Ok(Audited::clean(account));
        }

        let mut active = account.into_active_model();
        active.email_confirmed = Set(true);
        active.updated_at = Set(Some(Utc::now().into()));
        let account = self.user_repo.update(active).await?;

        let audit_error = self
            .audit
            .record_best_effort(
                Some(user_id),
                AuditAction::UpdateUser,
                Some("user"),
                Some(user_id),
                None,
            )
            .await;

        Ok(Audited {
            value: account,
            audit_error,
        })
    }

    /// Delete an account.
    pub async fn delete(&self, actor_id: &str, user_id: &str) -> AppResult<Audited<()>> {
        self.user_repo.delete(user_id).await?;

        let audit_error = self
            .audit
            .record_best_effort(
                Some(actor_id),
                AuditAction::DeleteUser,
                Some("user"),
                Some(user_id),
                None,
            )
            .await;

        Ok(Audited {
            value: (),
            audit_error,
        })
    }

    /// Resolve whether an account qualifies for sessions that require
    /// a confirmed email: it must exist, be active, and have confirmed
    /// its address.
    pub async fn resolve_eligibility(&self, user_id: &str) -> AppResult<user::Model> {
        let Some(account) = self.user_repo.find_by_id(user_id).await? else {
            return Err(AppError::Eligibility(format!(
                "No account found for voter {user_id}"
            )));
        };

        if account.status != UserStatus::Active {
            return Err(AppError::Eligibility(format!(
                "Account {user_id} is not active"
            )));
        }

        if !account.email_confirmed {
            return Err(AppError::Eligibility(format!(
                "Account {user_id} has not confirmed its email address"
            )));
        }

        Ok(account)
    }

    /// Check an email/password pair against stored credentials.
    ///
    /// Returns `None` on unknown email or mismatched password; the two
    /// cases are indistinguishable to the caller.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<user::Model>> {
        let Some(account) = self.user_repo.find_by_email(email).await? else {
            return Ok(None);
        };

        if verify_password(password, &account.password_hash)? {
            Ok(Some(account))
        } else {
            Ok(None)
        }
    }
}

/// Hash a password with Argon2id.
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
