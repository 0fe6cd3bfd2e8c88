//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the input
//! of each operation after the controller has checked that required data is present.

pub mod character;
pub mod favourite;
pub mod user;

/// Error message for create requests lacking a required field or body.
pub const MISSING_DATA: &str = "Missing data";
