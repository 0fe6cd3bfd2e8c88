//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation. Factories insert rows directly, so the user
//! password column holds whatever raw value the factory was given.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let character = factory::character::CharacterFactory::new(&db)
//!     .name("Yoda")
//!     .build()
//!     .await?;
//! let favourite = factory::create_favourite(&db, user.user_id, character.id_character).await?;
//! ```

pub mod character;
pub mod favourite;
pub mod helpers;
pub mod user;

pub use character::create_character;
pub use favourite::create_favourite;
pub use user::create_user;
