use super::*;

/// Tests that deleting a favourite matches on both ids.
///
/// Creates (user, a) and (user, b), deletes (user, b), and checks that (user, a)
/// survives.
///
/// Expected: Ok(true) with only the targeted pair removed
#[tokio::test]
async fn deletes_only_matching_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let a = factory::create_character(db).await?;
    let b = factory::create_character(db).await?;
    factory::create_favourite(db, user.user_id, a.id_character).await?;
    factory::create_favourite(db, user.user_id, b.id_character).await?;

    let repo = FavouriteRepository::new(db);
    let deleted = repo.delete(user.user_id, b.id_character).await?;

    assert!(deleted);
    assert!(repo.find(user.user_id, b.id_character).await?.is_none());
    assert!(repo.find(user.user_id, a.id_character).await?.is_some());

    Ok(())
}

/// Tests deleting a pair that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let deleted = FavouriteRepository::new(db)
        .delete(user.user_id, character.id_character)
        .await?;

    assert!(!deleted);

    Ok(())
}

/// Tests removing every favourite of one user.
///
/// Expected: Ok(2) with the other user's favourite untouched
#[tokio::test]
async fn deletes_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let a = factory::create_character(db).await?;
    let b = factory::create_character(db).await?;
    factory::create_favourite(db, user.user_id, a.id_character).await?;
    factory::create_favourite(db, user.user_id, b.id_character).await?;
    factory::create_favourite(db, other.user_id, a.id_character).await?;

    let repo = FavouriteRepository::new(db);
    let removed = repo.delete_by_user(user.user_id).await?;

    assert_eq!(removed, 2);
    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].user_id, other.user_id);

    Ok(())
}

/// Tests removing every favourite of one character.
///
/// Expected: Ok(1) and no favourites reference the character afterwards
#[tokio::test]
async fn deletes_by_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, character, _) = factory::helpers::create_favourite_with_dependencies(db).await?;

    let repo = FavouriteRepository::new(db);
    let removed = repo.delete_by_character(character.id_character).await?;

    assert_eq!(removed, 1);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
