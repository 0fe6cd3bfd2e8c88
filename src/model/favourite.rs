use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavouriteUserRefDto {
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavouriteCharacterRefDto {
    pub id_character: i32,
}

/// A favourite link, referencing its user and character by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavouriteDto {
    pub user: FavouriteUserRefDto,
    pub character: FavouriteCharacterRefDto,
}
