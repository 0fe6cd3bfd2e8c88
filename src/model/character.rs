use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user who favourited a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavouritedByDto {
    pub user_id: i32,
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id_character: i32,
    pub character_name: String,
    pub favourite_character_of: Vec<FavouritedByDto>,
}

/// Payload for `POST /characters`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCharacterDto {
    pub character_name: Option<String>,
}
