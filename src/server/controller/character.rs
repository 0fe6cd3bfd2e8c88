use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{
        controller::require_json, error::AppError, model::character::CreateCharacterParams,
        service::character::CharacterService, state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

const CHARACTER_NOT_FOUND: &str = "Character not found";

/// List all characters.
///
/// Each character lists the users who favourited it.
///
/// # Returns
/// - `200 OK` - List of characters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            characters
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a character by ID.
///
/// # Returns
/// - `200 OK` - Character with the users who favourited it
/// - `404 Not Found` - No character with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/characters/{id_character}",
    tag = CHARACTER_TAG,
    params(
        ("id_character" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id_character): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db)
        .get_by_id(id_character)
        .await?;

    match character {
        Some(character) => Ok((StatusCode::OK, Json(character.into_dto()))),
        None => Err(AppError::NotFound(CHARACTER_NOT_FOUND.to_string())),
    }
}

/// Create a new character.
///
/// # Returns
/// - `201 Created` - Created character
/// - `400 Bad Request` - `character_name` or the body is missing
/// - `409 Conflict` - Name already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Successfully created character", body = CharacterDto),
        (status = 400, description = "Missing data", body = ErrorDto),
        (status = 409, description = "Character name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCharacterParams::from_dto(require_json(payload)?)?;

    let character = CharacterService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(character.into_dto())))
}

/// Delete a character.
///
/// Removes the character's favourites and then the character.
///
/// # Returns
/// - `200 OK` - Character deleted
/// - `404 Not Found` - No character with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/characters/{id_character}",
    tag = CHARACTER_TAG,
    params(
        ("id_character" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted character", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    Path(id_character): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = CharacterService::new(&state.db)
        .delete(id_character)
        .await?;

    if !deleted {
        return Err(AppError::NotFound(CHARACTER_NOT_FOUND.to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "character deleted".to_string(),
        }),
    ))
}
