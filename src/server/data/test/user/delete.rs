use super::*;

/// Tests deleting a user by ID.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let deleted = UserRepository::new(db).delete(user.user_id).await?;

    assert!(deleted);
    let row = entity::prelude::User::find_by_id(user.user_id).one(db).await?;
    assert!(row.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
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

    let deleted = UserRepository::new(db).delete(99999).await?;

    assert!(!deleted);

    Ok(())
}
