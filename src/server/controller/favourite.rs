use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favourite::FavouriteDto,
    },
    server::{
        error::AppError, model::favourite::FavouriteKeyParams,
        service::favourite::FavouriteService, state::AppState,
    },
};

/// Tag for grouping favourite endpoints in OpenAPI documentation
pub static FAVOURITE_TAG: &str = "favourite";

/// List all favourites.
///
/// # Returns
/// - `200 OK` - List of favourites ordered by user, then character
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/favourites",
    tag = FAVOURITE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved favourites", body = Vec<FavouriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favourites(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let favourites = FavouriteService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            favourites
                .into_iter()
                .map(|f| f.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Mark a character as a user's favourite.
///
/// # Returns
/// - `201 Created` - Favourite created
/// - `404 Not Found` - User or character does not exist
/// - `409 Conflict` - The user already favourited this character
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favourites/{user_id}/{id_character}",
    tag = FAVOURITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("id_character" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 201, description = "Successfully created favourite", body = FavouriteDto),
        (status = 404, description = "User or character does not exist", body = ErrorDto),
        (status = 409, description = "Favourite already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favourite(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let favourite = FavouriteService::new(&state.db)
        .create(FavouriteKeyParams {
            user_id,
            character_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(favourite.into_dto())))
}

/// Remove a favourite.
///
/// Matches on both the user ID and the character ID.
///
/// # Returns
/// - `200 OK` - Favourite deleted
/// - `404 Not Found` - No such favourite
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favourites/{user_id}/{id_character}",
    tag = FAVOURITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("id_character" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted favourite", body = MessageDto),
        (status = 404, description = "Favourite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favourite(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = FavouriteService::new(&state.db)
        .delete(FavouriteKeyParams {
            user_id,
            character_id,
        })
        .await?;

    if !deleted {
        return Err(AppError::NotFound("Favourite not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "favourite deleted".to_string(),
        }),
    ))
}
