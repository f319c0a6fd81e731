use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
};

use crate::auth::password;
use crate::config::AdminBootstrap;
use crate::dto::admin::non_blank;
use crate::dto::{Credentials, NewUser, ProfileUpdate};
use crate::entities::user;
use crate::error::ServiceError;
use crate::sessions::Session;

/// Accounts, credentials and self-service profile edits.
#[derive(Debug, Clone)]
pub struct IdentityService {
    db: DatabaseConnection,
}

impl IdentityService {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a regular account.
    ///
    /// Username is checked before email. Both are compared exactly as submitted.
    ///
    /// # Errors
    ///
    /// `DuplicateUsername` or `DuplicateEmail` when either is taken.
    pub async fn register(&self, new_user: NewUser) -> Result<user::Model, ServiceError> {
        self.create_account(new_user, false).await
    }

    /// Verify a username/password pair.
    ///
    /// Unknown usernames and wrong passwords fail identically.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` on any mismatch.
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<user::Model, ServiceError> {
        let Some(user_model) = self.find_by_username(&credentials.username).await? else {
            tracing::info!(username = %credentials.username, "Login rejected");
            return Err(ServiceError::InvalidCredentials);
        };

        if !password::verify_password(&credentials.password, &user_model.password_hash)? {
            tracing::info!(user_id = user_model.id, "Login rejected");
            return Err(ServiceError::InvalidCredentials);
        }

        tracing::info!(user_id = user_model.id, "User authenticated");
        Ok(user_model)
    }

    /// Resolve the session's user.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for anonymous sessions, `NotFound` when the bound user no longer exists.
    pub async fn current_user(&self, session: &Session) -> Result<user::Model, ServiceError> {
        let user_id = session.require_user()?;
        self.find_by_id(user_id)
            .await?
            .ok_or(ServiceError::NotFound("User"))
    }

    /// Apply a partial profile update for the session's user. `is_admin` is never touched.
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `NotFound`, or `Validation` for a negative month count.
    pub async fn update_profile(
        &self,
        session: &Session,
        update: ProfileUpdate,
    ) -> Result<user::Model, ServiceError> {
        let user_model = self.current_user(session).await?;

        if update.postpartum_months.is_none() && update.full_name.is_none() {
            return Ok(user_model);
        }

        let mut active: user::ActiveModel = user_model.into();
        if let Some(months) = update.postpartum_months {
            crate::dto::forms::validate_postpartum_months(months)?;
            active.postpartum_months = Set(months);
        }
        if let Some(full_name) = update.full_name {
            non_blank(&full_name, "Full name")?;
            active.full_name = Set(full_name);
        }

        let updated = active.update(&self.db).await?;
        tracing::info!(
            user_id = updated.id,
            postpartum_months = updated.postpartum_months,
            "Profile updated"
        );
        Ok(updated)
    }

    /// Make sure the configured bootstrap admin exists and carries the admin flag.
    ///
    /// An existing account with that username is promoted; its password is left alone.
    ///
    /// # Errors
    ///
    /// Propagates registration and database errors.
    pub async fn ensure_admin(
        &self,
        bootstrap: &AdminBootstrap,
    ) -> Result<user::Model, ServiceError> {
        if let Some(existing) = self.find_by_username(&bootstrap.username).await? {
            if existing.is_admin {
                return Ok(existing);
            }
            let mut active: user::ActiveModel = existing.into();
            active.is_admin = Set(true);
            let promoted = active.update(&self.db).await?;
            tracing::info!(user_id = promoted.id, "Promoted bootstrap admin");
            return Ok(promoted);
        }

        let admin = self
            .create_account(
                NewUser {
                    username: bootstrap.username.clone(),
                    email: bootstrap.email.clone(),
                    password: bootstrap.password.clone(),
                    full_name: "Administrator".to_string(),
                },
                true,
            )
            .await?;
        tracing::info!(user_id = admin.id, "Created bootstrap admin");
        Ok(admin)
    }

    /// # Errors
    ///
    /// Database errors only.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>, ServiceError> {
        Ok(user::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// # Errors
    ///
    /// Database errors only.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user::Model>, ServiceError> {
        Ok(user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// Database errors only.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    async fn create_account(
        &self,
        new_user: NewUser,
        is_admin: bool,
    ) -> Result<user::Model, ServiceError> {
        if self.find_by_username(&new_user.username).await?.is_some() {
            return Err(ServiceError::DuplicateUsername);
        }
        if self.find_by_email(&new_user.email).await?.is_some() {
            return Err(ServiceError::DuplicateEmail);
        }

        let password_hash = password::hash_password(&new_user.password)?;

        let record = user::ActiveModel {
            username: Set(new_user.username),
            email: Set(new_user.email),
            password_hash: Set(password_hash),
            full_name: Set(new_user.full_name),
            date_joined: Set(Utc::now().fixed_offset()),
            postpartum_months: Set(0),
            is_admin: Set(is_admin),
            ..Default::default()
        };

        let created = record.insert(&self.db).await.map_err(unique_violation)?;
        tracing::info!(user_id = created.id, username = %created.username, "User registered");
        Ok(created)
    }
}

/// A concurrent registration can slip past the lookups; the unique indexes still catch it.
fn unique_violation(err: DbErr) -> ServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("email") => {
            ServiceError::DuplicateEmail
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::DuplicateUsername,
        _ => ServiceError::Database(err),
    }
}
