//! Favourite domain model.

use crate::model::favourite::{FavouriteCharacterRefDto, FavouriteDto, FavouriteUserRefDto};

/// Link between a user and a character they favourited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Favourite {
    pub user_id: i32,
    pub character_id: i32,
}

impl Favourite {
    pub fn from_entity(entity: entity::favourite::Model) -> Self {
        Self {
            user_id: entity.user_id,
            character_id: entity.id_character,
        }
    }

    pub fn into_dto(self) -> FavouriteDto {
        FavouriteDto {
            user: FavouriteUserRefDto {
                user_id: self.user_id,
            },
            character: FavouriteCharacterRefDto {
                id_character: self.character_id,
            },
        }
    }
}

/// Identifies a favourite by its composite key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavouriteKeyParams {
    pub user_id: i32,
    pub character_id: i32,
}
