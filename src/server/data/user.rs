//! User data repository for database operations.
//!
//! Provides the `UserRepository` for creating, reading, updating, and deleting user
//! rows. Every returned `User` is enriched with its favourited characters.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::favourite::FavouriteRepository,
    model::user::{CreateUserParams, UpdateUserParams, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all users ordered by id, each with their favourites.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::UserId)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = users.iter().map(|u| u.user_id).collect();
        let mut favourites = FavouriteRepository::new(self.db)
            .get_characters_by_user_ids(&ids)
            .await?;

        Ok(users
            .into_iter()
            .map(|u| {
                let favs = favourites.remove(&u.user_id).unwrap_or_default();
                User::from_entity(u, favs)
            })
            .collect())
    }

    /// Finds a user by id, with their favourites.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.with_favourites(user).await?))
    }

    /// Checks whether a user with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::UserId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - Profile fields; `params.password` is ignored
    /// - `password_hash` - Hashed password to store
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with no favourites
    /// - `Err(DbErr)` - Insert failed, including unique constraint violations on
    ///   `user_name` or `email`
    pub async fn create(&self, params: CreateUserParams, password_hash: String) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            user_name: ActiveValue::Set(params.user_name),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user, Vec::new()))
    }

    /// Applies the supplied fields of a partial update.
    ///
    /// # Arguments
    /// - `params` - Fields to change; `params.password` is ignored
    /// - `password_hash` - New hashed password, if the password changes
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user with favourites
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Update failed
    pub async fn update(
        &self,
        params: UpdateUserParams,
        password_hash: Option<String>,
    ) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.clone().into();
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(user_name) = params.user_name {
            active_model.user_name = ActiveValue::Set(user_name);
        }
        if let Some(first_name) = params.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(hash) = password_hash {
            active_model.password = ActiveValue::Set(hash);
        }

        let user = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            user
        };

        Ok(Some(self.with_favourites(user).await?))
    }

    /// Deletes a user row.
    ///
    /// Dependent favourites must be removed first; see `FavouriteRepository::delete_by_user`.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_favourites(&self, user: entity::user::Model) -> Result<User, DbErr> {
        let favourites = FavouriteRepository::new(self.db)
            .get_characters_by_user_ids(&[user.user_id])
            .await?
            .remove(&user.user_id)
            .unwrap_or_default();

        Ok(User::from_entity(user, favourites))
    }
}
