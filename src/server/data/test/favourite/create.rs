use super::*;

/// Tests creating a favourite for an existing user and character.
///
/// Expected: Ok with the link returned and findable by its pair
#[tokio::test]
async fn creates_favourite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let repo = FavouriteRepository::new(db);
    let favourite = repo.create(user.user_id, character.id_character).await?;

    assert_eq!(favourite.user_id, user.user_id);
    assert_eq!(favourite.character_id, character.id_character);
    assert_eq!(
        repo.find(user.user_id, character.id_character).await?,
        Some(favourite)
    );

    Ok(())
}

/// Tests that a favourite cannot reference a missing character.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FavouriteRepository::new(db).create(user.user_id, 99999).await;

    assert!(result.is_err());

    Ok(())
}
