use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{character::CharacterRepository, favourite::FavouriteRepository},
    error::AppError,
    model::character::{Character, CreateCharacterParams},
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every character with the users who favourited it
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        let characters = CharacterRepository::new(self.db).get_all().await?;
        Ok(characters)
    }

    /// Gets a specific character by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Character>, AppError> {
        let character = CharacterRepository::new(self.db).find_by_id(id).await?;
        Ok(character)
    }

    /// Creates a character, returning a conflict when the name is taken
    pub async fn create(&self, params: CreateCharacterParams) -> Result<Character, AppError> {
        let character = CharacterRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, "Character already exists"))?;

        tracing::debug!(id_character = character.id, "Created character");

        Ok(character)
    }

    /// Deletes a character together with its favourites
    /// Returns false if the character doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let character_repo = CharacterRepository::new(&txn);
        if !character_repo.exists(id).await? {
            return Ok(false);
        }

        let removed = FavouriteRepository::new(&txn)
            .delete_by_character(id)
            .await?;
        character_repo.delete(id).await?;

        txn.commit().await?;

        tracing::debug!(id_character = id, favourites = removed, "Deleted character");

        Ok(true)
    }
}
