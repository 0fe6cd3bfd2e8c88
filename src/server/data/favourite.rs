//! Favourite data repository.
//!
//! Besides plain CRUD on the join table, this repository resolves the one-hop
//! relationships used when serializing users and characters.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::{
    character::FavouritedBy, favourite::Favourite, user::FavouriteCharacter,
};

pub struct FavouriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavouriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every favourite ordered by user id, then character id.
    pub async fn get_all(&self) -> Result<Vec<Favourite>, DbErr> {
        let favourites = entity::prelude::Favourite::find()
            .order_by_asc(entity::favourite::Column::UserId)
            .order_by_asc(entity::favourite::Column::IdCharacter)
            .all(self.db)
            .await?;

        Ok(favourites.into_iter().map(Favourite::from_entity).collect())
    }

    /// Finds the favourite matching both the user id and the character id.
    pub async fn find(&self, user_id: i32, character_id: i32) -> Result<Option<Favourite>, DbErr> {
        let favourite = entity::prelude::Favourite::find_by_id((user_id, character_id))
            .one(self.db)
            .await?;

        Ok(favourite.map(Favourite::from_entity))
    }

    /// Inserts a favourite linking an existing user and character.
    pub async fn create(&self, user_id: i32, character_id: i32) -> Result<Favourite, DbErr> {
        let favourite = entity::favourite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            id_character: ActiveValue::Set(character_id),
        }
        .insert(self.db)
        .await?;

        Ok(Favourite::from_entity(favourite))
    }

    /// Deletes the favourite matching both ids.
    ///
    /// # Returns
    /// - `Ok(true)` - A favourite was deleted
    /// - `Ok(false)` - No favourite matched the pair
    pub async fn delete(&self, user_id: i32, character_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favourite::delete_many()
            .filter(entity::favourite::Column::UserId.eq(user_id))
            .filter(entity::favourite::Column::IdCharacter.eq(character_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every favourite of a user, returning the number removed.
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Favourite::delete_many()
            .filter(entity::favourite::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every favourite of a character, returning the number removed.
    pub async fn delete_by_character(&self, character_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Favourite::delete_many()
            .filter(entity::favourite::Column::IdCharacter.eq(character_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the favourited characters of each given user.
    ///
    /// Users without favourites are absent from the returned map. Characters are
    /// ordered by character id.
    pub async fn get_characters_by_user_ids(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<FavouriteCharacter>>, DbErr> {
        let mut map: HashMap<i32, Vec<FavouriteCharacter>> = HashMap::new();
        if user_ids.is_empty() {
            return Ok(map);
        }

        let rows = entity::prelude::Favourite::find()
            .filter(entity::favourite::Column::UserId.is_in(user_ids.to_vec()))
            .find_also_related(entity::prelude::Character)
            .order_by_asc(entity::favourite::Column::IdCharacter)
            .all(self.db)
            .await?;

        for (favourite, character) in rows {
            if let Some(character) = character {
                map.entry(favourite.user_id)
                    .or_default()
                    .push(FavouriteCharacter::from_entity(character));
            }
        }

        Ok(map)
    }

    /// Gets the users who favourited each given character, ordered by user id.
    pub async fn get_users_by_character_ids(
        &self,
        character_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<FavouritedBy>>, DbErr> {
        let mut map: HashMap<i32, Vec<FavouritedBy>> = HashMap::new();
        if character_ids.is_empty() {
            return Ok(map);
        }

        let rows = entity::prelude::Favourite::find()
            .filter(entity::favourite::Column::IdCharacter.is_in(character_ids.to_vec()))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::favourite::Column::UserId)
            .all(self.db)
            .await?;

        for (favourite, user) in rows {
            if let Some(user) = user {
                map.entry(favourite.id_character)
                    .or_default()
                    .push(FavouritedBy::from_entity(user));
            }
        }

        Ok(map)
    }
}
