use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::favourite::FavouriteRepository,
    model::character::{Character, CreateCharacterParams},
};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all characters ordered by id, each with the users who favourited them
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let characters = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::IdCharacter)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = characters.iter().map(|c| c.id_character).collect();
        let mut users = FavouriteRepository::new(self.db)
            .get_users_by_character_ids(&ids)
            .await?;

        Ok(characters
            .into_iter()
            .map(|c| {
                let favourite_of = users.remove(&c.id_character).unwrap_or_default();
                Character::from_entity(c, favourite_of)
            })
            .collect())
    }

    /// Gets a character by ID with the users who favourited it
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let Some(character) = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let favourite_of = FavouriteRepository::new(self.db)
            .get_users_by_character_ids(&[id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(Some(Character::from_entity(character, favourite_of)))
    }

    /// Checks if a character with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Character::find()
            .filter(entity::character::Column::IdCharacter.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a new character, failing on a duplicate name
    pub async fn create(&self, params: CreateCharacterParams) -> Result<Character, DbErr> {
        let character = entity::character::ActiveModel {
            character_name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Character::from_entity(character, Vec::new()))
    }

    /// Deletes a character, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
