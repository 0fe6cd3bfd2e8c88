use super::*;

/// Tests listing characters ordered by id with their favouriting users.
///
/// Expected: Ok with one unfavourited and one favourited character
#[tokio::test]
async fn lists_characters_with_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lonely = factory::create_character(db).await?;
    let (user, popular, _) = factory::helpers::create_favourite_with_dependencies(db).await?;

    let characters = CharacterRepository::new(db).get_all().await?;

    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].id, lonely.id_character);
    assert!(characters[0].favourite_of.is_empty());
    assert_eq!(characters[1].id, popular.id_character);
    assert_eq!(characters[1].favourite_of[0].user_id, user.user_id);

    Ok(())
}
