use super::*;

/// Tests fetching a user with their favourites.
///
/// Expected: Ok(Some) with favourited characters ordered by id
#[tokio::test]
async fn finds_user_with_favourites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let yoda = factory::character::CharacterFactory::new(db)
        .name("Yoda")
        .build()
        .await?;
    let leia = factory::character::CharacterFactory::new(db)
        .name("Leia")
        .build()
        .await?;
    factory::create_favourite(db, user.user_id, leia.id_character).await?;
    factory::create_favourite(db, user.user_id, yoda.id_character).await?;

    let found = UserRepository::new(db).find_by_id(user.user_id).await?.unwrap();

    assert_eq!(found.id, user.user_id);
    let names: Vec<_> = found
        .favourites
        .iter()
        .map(|f| f.character_name.as_str())
        .collect();
    assert_eq!(names, vec!["Yoda", "Leia"]);

    Ok(())
}

/// Tests fetching a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db).find_by_id(99999).await?;

    assert!(found.is_none());

    Ok(())
}
