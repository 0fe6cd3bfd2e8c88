use super::*;

/// Tests resolving favourited characters for a set of users.
///
/// Expected: Ok with users lacking favourites absent from the map
#[tokio::test]
async fn groups_characters_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character, _) = factory::helpers::create_favourite_with_dependencies(db).await?;
    let idle = factory::create_user(db).await?;

    let map = FavouriteRepository::new(db)
        .get_characters_by_user_ids(&[user.user_id, idle.user_id])
        .await?;

    assert_eq!(map.len(), 1);
    assert_eq!(map[&user.user_id][0].character_name, character.character_name);

    Ok(())
}

/// Tests resolving users for a set of characters.
///
/// Expected: Ok mapping the character to its single user
#[tokio::test]
async fn groups_users_by_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character, _) = factory::helpers::create_favourite_with_dependencies(db).await?;

    let map = FavouriteRepository::new(db)
        .get_users_by_character_ids(&[character.id_character])
        .await?;

    assert_eq!(map[&character.id_character][0].user_name, user.user_name);

    Ok(())
}

/// Tests that an empty id list short-circuits.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn empty_ids_return_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let map = FavouriteRepository::new(db)
        .get_characters_by_user_ids(&[])
        .await?;

    assert!(map.is_empty());

    Ok(())
}
