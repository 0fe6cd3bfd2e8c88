//! Character domain models and parameters.

use crate::{
    model::character::{CharacterDto, CreateCharacterDto, FavouritedByDto},
    server::{error::AppError, model::MISSING_DATA},
};

/// A user who favourited a character.
#[derive(Debug, Clone, PartialEq)]
pub struct FavouritedBy {
    pub user_id: i32,
    pub user_name: String,
}

impl FavouritedBy {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            user_name: entity.user_name,
        }
    }

    pub fn into_dto(self) -> FavouritedByDto {
        FavouritedByDto {
            user_id: self.user_id,
            user_name: self.user_name,
        }
    }
}

/// Character with the users who favourited it.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    /// Users ordered by user id.
    pub favourite_of: Vec<FavouritedBy>,
}

impl Character {
    pub fn from_entity(entity: entity::character::Model, favourite_of: Vec<FavouritedBy>) -> Self {
        Self {
            id: entity.id_character,
            name: entity.character_name,
            favourite_of,
        }
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id_character: self.id,
            character_name: self.name,
            favourite_character_of: self.favourite_of.into_iter().map(|u| u.into_dto()).collect(),
        }
    }
}

/// Parameters for creating a character.
#[derive(Debug, Clone)]
pub struct CreateCharacterParams {
    pub name: String,
}

impl CreateCharacterParams {
    /// Converts the request payload, requiring `character_name`.
    pub fn from_dto(dto: CreateCharacterDto) -> Result<Self, AppError> {
        dto.character_name
            .map(|name| Self { name })
            .ok_or_else(|| AppError::BadRequest(MISSING_DATA.to_string()))
    }
}
