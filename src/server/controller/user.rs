use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::require_json,
        error::AppError,
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

const USER_NOT_FOUND: &str = "User not found";

/// List all users.
///
/// Returns every user ordered by ID, each with the characters they favourited.
/// Passwords are never included.
///
/// # Returns
/// - `200 OK` - List of users
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a user by ID.
///
/// # Returns
/// - `200 OK` - User with favourites
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(user_id).await?;

    match user {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => Err(AppError::NotFound(USER_NOT_FOUND.to_string())),
    }
}

/// Create a new user.
///
/// All of `user_name`, `first_name`, `last_name`, `email` and `password` are required.
/// The password is stored as an Argon2id hash.
///
/// # Returns
/// - `201 Created` - Created user
/// - `400 Bad Request` - A required field or the body is missing
/// - `409 Conflict` - Username or email already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Missing data", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_dto(require_json(payload)?)?;

    let user = UserService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Update a user.
///
/// Applies only the fields present in the body; absent fields keep their value.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Body missing or not JSON
/// - `404 Not Found` - No user with that ID
/// - `409 Conflict` - New username or email already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Missing data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateUserParams::from_dto(user_id, require_json(payload)?);

    let user = UserService::new(&state.db).update(params).await?;

    match user {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => Err(AppError::NotFound(USER_NOT_FOUND.to_string())),
    }
}

/// Delete a user.
///
/// Removes the user's favourites and then the user.
///
/// # Returns
/// - `200 OK` - User deleted
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = MessageDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = UserService::new(&state.db).delete(user_id).await?;

    if !deleted {
        return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "user deleted".to_string(),
        }),
    ))
}
