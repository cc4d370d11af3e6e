use super::*;

/// Tests batch loading of accounts.
///
/// Verifies that only existing ids appear in the returned map.
///
/// Expected: Ok with two entries
#[tokio::test]
async fn loads_existing_accounts_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user_with_role(db, "Trainer").await?;

    let repo = UserRepository::new(db);
    let users = repo.get_by_ids(&[first.id, second.id, 9999]).await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[&first.id].email, first.email);
    assert_eq!(users[&second.id].role, Role::Trainer);

    Ok(())
}

/// Tests that an empty id list needs no query.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_map_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_by_ids(&[]).await?;

    assert!(users.is_empty());

    Ok(())
}
