use super::*;

/// Tests an account whose role is on the allow-list.
///
/// Expected: Ok(User) for the token's account
#[tokio::test]
async fn grants_access_to_allowed_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 60);

    let entity = factory::create_user_with_role(db, "Trainer").await?;
    let user = User::from_entity(entity)?;
    let headers = bearer(&tokens.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Role::Gym, Role::Trainer])
        .await?;

    assert_eq!(result, user);

    Ok(())
}

/// Tests that an empty allow-list admits any authenticated role.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_list_admits_any_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 60);

    let entity = factory::create_user_with_role(db, "Owner").await?;
    let user = User::from_entity(entity)?;
    let headers = bearer(&tokens.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests an account whose role is not on the allow-list.
///
/// Expected: Err(AuthError::AccessDenied) naming the account and role
#[tokio::test]
async fn denies_disallowed_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 60);

    let entity = factory::create_user_with_role(db, "Member").await?;
    let user = User::from_entity(entity)?;
    let headers = bearer(&tokens.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Role::Trainer])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied { user_id, role, .. })) => {
            assert_eq!(user_id, user.id);
            assert_eq!(role, Role::Member);
        }
        other => panic!("Expected AccessDenied, got {:?}", other),
    }

    Ok(())
}
