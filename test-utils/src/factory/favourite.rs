//! Favourite factory for linking users to characters.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favourite linking an existing user and character.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of an existing user
/// - `id_character` - ID of an existing character
///
/// # Returns
/// - `Ok(entity::favourite::Model)` - Created favourite
/// - `Err(DbErr)` - Insert failed (duplicate pair or missing reference)
pub async fn create_favourite(
    db: &DatabaseConnection,
    user_id: i32,
    id_character: i32,
) -> Result<entity::favourite::Model, DbErr> {
    entity::favourite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        id_character: ActiveValue::Set(id_character),
    }
    .insert(db)
    .await
}
