use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        character::CharacterRepository, favourite::FavouriteRepository, user::UserRepository,
    },
    error::AppError,
    model::favourite::{Favourite, FavouriteKeyParams},
};

const FAVOURITE_CONFLICT: &str = "Favourite already exists";

pub struct FavouriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavouriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every favourite
    pub async fn get_all(&self) -> Result<Vec<Favourite>, AppError> {
        let favourites = FavouriteRepository::new(self.db).get_all().await?;
        Ok(favourites)
    }

    /// Links a user to a character.
    ///
    /// The user is checked before the character, and both before the duplicate check.
    ///
    /// # Returns
    /// - `Ok(Favourite)` - Newly created link
    /// - `Err(AppError::NotFound)` - User or character does not exist
    /// - `Err(AppError::Conflict)` - The pair is already a favourite
    pub async fn create(&self, key: FavouriteKeyParams) -> Result<Favourite, AppError> {
        let txn = self.db.begin().await?;

        if !UserRepository::new(&txn).exists(key.user_id).await? {
            return Err(AppError::NotFound("User does not exist".to_string()));
        }
        if !CharacterRepository::new(&txn)
            .exists(key.character_id)
            .await?
        {
            return Err(AppError::NotFound("Character does not exist".to_string()));
        }

        let favourite_repo = FavouriteRepository::new(&txn);
        if favourite_repo
            .find(key.user_id, key.character_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(FAVOURITE_CONFLICT.to_string()));
        }

        let favourite = favourite_repo
            .create(key.user_id, key.character_id)
            .await
            .map_err(|e| AppError::from_unique_violation(e, FAVOURITE_CONFLICT))?;

        txn.commit().await?;

        tracing::debug!(
            user_id = favourite.user_id,
            id_character = favourite.character_id,
            "Created favourite"
        );

        Ok(favourite)
    }

    /// Removes the favourite matching both the user and the character.
    /// Returns false if no such favourite exists
    pub async fn delete(&self, key: FavouriteKeyParams) -> Result<bool, AppError> {
        let deleted = FavouriteRepository::new(self.db)
            .delete(key.user_id, key.character_id)
            .await?;

        Ok(deleted)
    }
}
