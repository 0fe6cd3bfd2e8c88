//! HTTP request handlers.
//!
//! Controllers extract path parameters and JSON bodies, convert DTOs into parameter
//! models, call the matching service, and convert the result back into a DTO. Every
//! handler carries a `utoipa::path` annotation that feeds the OpenAPI document and the
//! root sitemap.

use axum::{extract::rejection::JsonRejection, Json};

use crate::server::{error::AppError, model::MISSING_DATA};

pub mod character;
pub mod favourite;
pub mod sitemap;
pub mod user;

#[cfg(test)]
mod test;

/// Unwraps a JSON body, treating an absent or malformed body as missing data.
fn require_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|_| AppError::BadRequest(MISSING_DATA.to_string()))
}
