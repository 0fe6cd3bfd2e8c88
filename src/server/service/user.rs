//! User service for business logic.
//!
//! Hashes passwords before they reach storage, translates unique constraint violations
//! into conflicts, and removes a user's favourites together with the user.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{favourite::FavouriteRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
    util::password::hash_password,
};

const USER_CONFLICT: &str = "User already exists";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user with their favourites.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(id).await?;
        Ok(user)
    }

    /// Creates a user after hashing their password.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::Conflict)` - Username or email already taken
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let password_hash = hash_in_background(params.password.clone()).await?;

        let user = UserRepository::new(self.db)
            .create(params, password_hash)
            .await
            .map_err(|e| AppError::from_unique_violation(e, USER_CONFLICT))?;

        tracing::debug!(user_id = user.id, "Created user");

        Ok(user)
    }

    /// Applies a partial update, re-hashing the password when one is supplied.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::Conflict)` - New username or email already taken
    pub async fn update(&self, mut params: UpdateUserParams) -> Result<Option<User>, AppError> {
        let password_hash = match params.password.take() {
            Some(password) => Some(hash_in_background(password).await?),
            None => None,
        };

        let user = UserRepository::new(self.db)
            .update(params, password_hash)
            .await
            .map_err(|e| AppError::from_unique_violation(e, USER_CONFLICT))?;

        if let Some(ref user) = user {
            tracing::debug!(user_id = user.id, "Updated user");
        }

        Ok(user)
    }

    /// Deletes a user and all of their favourites in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - User and favourites deleted
    /// - `Ok(false)` - No user with that ID; nothing changed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if !user_repo.exists(id).await? {
            return Ok(false);
        }

        let removed = FavouriteRepository::new(&txn).delete_by_user(id).await?;
        user_repo.delete(id).await?;

        txn.commit().await?;

        tracing::debug!(user_id = id, favourites = removed, "Deleted user");

        Ok(true)
    }
}

/// Runs Argon2 hashing on the blocking pool so it does not stall the async runtime.
async fn hash_in_background(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))??;

    Ok(hash)
}
