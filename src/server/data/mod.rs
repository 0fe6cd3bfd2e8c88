//! Database repository layer.
//!
//! Repositories run the CRUD queries for each table and return domain models so the
//! service layer never handles SeaORM entities directly. Each repository borrows any
//! `ConnectionTrait` implementor, which lets the same queries run against the pool or
//! inside a transaction opened by a service.
//!
//! Relationships are navigated with explicit queries (favourites by user id, favourites
//! by character id) rather than lazily loaded back-references.

pub mod character;
pub mod favourite;
pub mod user;

#[cfg(test)]
mod test;
