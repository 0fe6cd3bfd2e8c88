//! User domain models and parameters.
//!
//! A `User` carries its favourites one hop deep, as `(character id, character name)`
//! pairs. The password hash never leaves the data layer.

use crate::{
    model::user::{CreateUserDto, FavouriteCharacterDto, UpdateUserDto, UserDto},
    server::{error::AppError, model::MISSING_DATA},
};

/// A character favourited by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct FavouriteCharacter {
    pub character_id: i32,
    pub character_name: String,
}

impl FavouriteCharacter {
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            character_id: entity.id_character,
            character_name: entity.character_name,
        }
    }

    pub fn into_dto(self) -> FavouriteCharacterDto {
        FavouriteCharacterDto {
            id_character: self.character_id,
            character_name: self.character_name,
        }
    }
}

/// User with profile fields and favourited characters.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Favourited characters ordered by character id.
    pub favourites: Vec<FavouriteCharacter>,
}

impl User {
    /// Converts an entity model and its favourites into a user domain model.
    ///
    /// The stored password hash is dropped here.
    pub fn from_entity(entity: entity::user::Model, favourites: Vec<FavouriteCharacter>) -> Self {
        Self {
            id: entity.user_id,
            user_name: entity.user_name,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            favourites,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.id,
            user_name: self.user_name,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            favourites: self.favourites.into_iter().map(|f| f.into_dto()).collect(),
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Plaintext password; the service hashes it before it reaches the repository.
    pub password: String,
}

impl CreateUserParams {
    /// Converts the request payload, requiring every field to be present.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - All fields supplied
    /// - `Err(AppError::BadRequest)` - At least one field missing or null
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        match (
            dto.user_name,
            dto.first_name,
            dto.last_name,
            dto.email,
            dto.password,
        ) {
            (Some(user_name), Some(first_name), Some(last_name), Some(email), Some(password)) => {
                Ok(Self {
                    user_name,
                    first_name,
                    last_name,
                    email,
                    password,
                })
            }
            _ => Err(AppError::BadRequest(MISSING_DATA.to_string())),
        }
    }
}

/// Parameters for a partial user update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub id: i32,
    pub user_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Plaintext password; hashed by the service.
    pub password: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            user_name: dto.user_name,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            password: dto.password,
        }
    }
}
