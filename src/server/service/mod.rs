//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer:
//!
//! - **Business Logic**: Existence and duplicate checks, password hashing
//! - **Orchestration**: Coordinating several repository calls for one request
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Multi-statement mutations run in one transaction that
//!   commits on success and rolls back when dropped on an early return

pub mod character;
pub mod favourite;
pub mod user;

#[cfg(test)]
mod test;
