//! SeaORM entities for the favourites schema.
//!
//! Three tables: `users`, `characters`, and the `favourites` join table whose
//! composite primary key references both.

pub mod prelude;

pub mod character;
pub mod favourite;
pub mod user;
