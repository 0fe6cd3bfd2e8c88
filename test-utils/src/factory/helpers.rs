//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Unique columns (`user_name`, `email`, `character_name`) are derived from this
/// value so factories never collide within a test.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a character, and a favourite linking them.
///
/// # Returns
/// - `Ok((user, character, favourite))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_favourite_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::character::Model,
        entity::favourite::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let character = crate::factory::character::create_character(db).await?;
    let favourite =
        crate::factory::favourite::create_favourite(db, user.user_id, character.id_character)
            .await?;

    Ok((user, character, favourite))
}
