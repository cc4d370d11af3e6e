use super::*;

/// Tests that a gym owner and one of its trainers resolve to the same gym.
///
/// Expected: Ok(gym id) for both accounts
#[tokio::test]
async fn resolves_owner_and_trainer_to_their_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let scope = GymScope::new(db);

    let owner = User::from_entity(fixture.owner)?;
    let trainer = User::from_entity(fixture.trainer_user)?;

    assert_eq!(scope.staff_gym_id(&owner).await?, fixture.gym.id);
    assert_eq!(scope.staff_gym_id(&trainer).await?, fixture.gym.id);

    Ok(())
}

/// Tests staff resolution for a Member account.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_member_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;

    let member = User::from_entity(fixture.member_user)?;
    let result = GymScope::new(db).staff_gym_id(&member).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}

/// Tests staff resolution for a Gym account that owns no gym and a Trainer
/// account on no roster.
///
/// Expected: Err(AppError::Forbidden) for both
#[tokio::test]
async fn forbids_staff_without_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let scope = GymScope::new(db);

    let owner = User::from_entity(factory::create_user_with_role(db, "Gym").await?)?;
    let trainer = User::from_entity(factory::create_user_with_role(db, "Trainer").await?)?;

    assert!(matches!(
        scope.staff_gym_id(&owner).await,
        Err(AppError::Forbidden(msg)) if msg == "You are not associated with a gym"
    ));
    assert!(matches!(
        scope.staff_gym_id(&trainer).await,
        Err(AppError::Forbidden(msg)) if msg == "Trainer not assigned to any gym"
    ));

    Ok(())
}
