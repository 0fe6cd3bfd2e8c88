use super::*;

/// Tests deleting a character by ID.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    let deleted = CharacterRepository::new(db)
        .delete(character.id_character)
        .await?;

    assert!(deleted);
    let row = entity::prelude::Character::find_by_id(character.id_character)
        .one(db)
        .await?;
    assert!(row.is_none());

    Ok(())
}

/// Tests deleting a character that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CharacterRepository::new(db).delete(99999).await?;

    assert!(!deleted);

    Ok(())
}
