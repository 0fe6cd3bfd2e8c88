//! Transport DTOs shared by the HTTP layer.
//!
//! These are the JSON shapes sent and received by the API. They carry
//! `utoipa::ToSchema` so the OpenAPI document describes them.

pub mod api;
pub mod character;
pub mod favourite;
pub mod user;
