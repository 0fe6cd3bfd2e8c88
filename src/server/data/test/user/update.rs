use super::*;

/// Tests that a partial update changes only the supplied fields.
///
/// Expected: Ok(Some) with email changed and other fields preserved
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(
            UpdateUserParams {
                id: user.user_id,
                email: Some("new@example.com".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?
        .unwrap();

    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.user_name, user.user_name);
    assert_eq!(updated.first_name, user.first_name);
    assert_eq!(updated.last_name, user.last_name);

    let row = entity::prelude::User::find_by_id(user.user_id).one(db).await?.unwrap();
    assert_eq!(row.password, user.password);

    Ok(())
}

/// Tests replacing the stored password hash.
///
/// Expected: Ok(Some) with the new hash persisted
#[tokio::test]
async fn updates_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    UserRepository::new(db)
        .update(
            UpdateUserParams {
                id: user.user_id,
                ..Default::default()
            },
            Some("new-hash".to_string()),
        )
        .await?;

    let row = entity::prelude::User::find_by_id(user.user_id).one(db).await?.unwrap();
    assert_eq!(row.password, "new-hash");

    Ok(())
}

/// Tests an update that supplies no fields.
///
/// Expected: Ok(Some) with the user unchanged
#[tokio::test]
async fn empty_update_returns_user_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favourite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(
            UpdateUserParams {
                id: user.user_id,
                ..Default::default()
            },
            None,
        )
        .await?
        .unwrap();

    assert_eq!(updated.user_name, user.user_name);
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests updating a user that does not exist.
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

    let result = UserRepository::new(db)
        .update(
            UpdateUserParams {
                id: 99999,
                first_name: Some("Nobody".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
