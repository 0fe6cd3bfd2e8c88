use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the profile fields and stores the given
/// password hash rather than the plaintext password.
///
/// Expected: Ok with user created and no favourites
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(luke(), "stored-hash".to_string()).await?;

    assert_eq!(user.user_name, "luke");
    assert_eq!(user.email, "luke@tatooine.org");
    assert!(user.favourites.is_empty());

    let row = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(row.password, "stored-hash");

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn fails_for_duplicate_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_name("luke")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(luke(), "hash".to_string())
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that emails are unique.
///
/// Expected: Err when another user already has the email
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("luke@tatooine.org")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(luke(), "hash".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
