use super::*;

/// Tests registering a new account.
///
/// Verifies that the returned token names the created account and that the
/// role is stored as submitted.
///
/// Expected: Ok(AuthSession) with a verifiable token
#[tokio::test]
async fn registers_account_and_issues_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 60);

    let session = AuthService::new(db, &tokens)
        .signup(signup_params("pat@example.com", "Trainer"))
        .await?;

    assert_eq!(session.user.email, "pat@example.com");
    assert_eq!(session.user.role, Role::Trainer);

    let claims = tokens.verify(&session.token)?;
    assert_eq!(claims.user_id()?, session.user.id);

    Ok(())
}

/// Tests that an email can only be registered once.
///
/// Expected: Err(AppError::BadRequest("User already exists"))
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 60);
    let service = AuthService::new(db, &tokens);

    service
        .signup(signup_params("pat@example.com", "Member"))
        .await?;
    let result = service
        .signup(signup_params("pat@example.com", "Gym"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "User already exists"));

    Ok(())
}

/// Tests signup with a role outside the four known roles.
///
/// Expected: Err(AppError::BadRequest("Invalid role"))
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 60);

    let result = AuthService::new(db, &tokens)
        .signup(signup_params("pat@example.com", "Admin"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid role"));

    Ok(())
}

/// Tests signup with a blank field.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 60);

    let mut params = signup_params("pat@example.com", "Member");
    params.name = String::new();

    let result = AuthService::new(db, &tokens).signup(params).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
