use super::*;

/// Tests creating a new character.
///
/// Expected: Ok with character created and nobody favouriting it yet
#[tokio::test]
async fn creates_new_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = CharacterRepository::new(db)
        .create(CreateCharacterParams {
            name: "Yoda".to_string(),
        })
        .await?;

    assert_eq!(character.name, "Yoda");
    assert!(character.favourite_of.is_empty());

    Ok(())
}

/// Tests that character names are unique.
///
/// Expected: Err on the second insert of the same name
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    repo.create(CreateCharacterParams {
        name: "Yoda".to_string(),
    })
    .await?;

    let result = repo
        .create(CreateCharacterParams {
            name: "Yoda".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
