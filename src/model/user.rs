use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A character the user has marked as a favourite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavouriteCharacterDto {
    pub id_character: i32,
    pub character_name: String,
}

/// A user as returned by the API. The password is never included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub user_id: i32,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub favourites: Vec<FavouriteCharacterDto>,
}

/// Payload for `POST /users`.
///
/// Fields are optional at the type level so a missing field surfaces as a
/// "Missing data" error rather than a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub user_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Payload for `PUT /users/{id}`. Only supplied fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub user_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
