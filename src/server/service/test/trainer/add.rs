use super::*;

/// Tests adding an existing Trainer account to the owner's gym.
///
/// Expected: Ok(TrainerWithUser) on the owner's gym roster
#[tokio::test]
async fn adds_trainer_account_to_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym(db).await?;
    let account = factory::create_user_with_role(db, "Trainer").await?;
    let owner = User::from_entity(owner)?;

    let added = TrainerService::new(db)
        .add(&owner, &account.email.to_uppercase(), Some("555-0111".to_string()))
        .await?;

    assert_eq!(added.trainer.gym_id, gym.id);
    assert_eq!(added.user.id, account.id);
    assert_eq!(added.trainer.contact_number.as_deref(), Some("555-0111"));

    Ok(())
}

/// Tests adding a trainer who already works at another gym.
///
/// Expected: Err(AppError::BadRequest("Trainer already assigned to another gym"))
#[tokio::test]
async fn rejects_trainer_of_another_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = create_gym_with_roster(db).await?;
    let (other_owner, _) = factory::create_gym(db).await?;
    let other_owner = User::from_entity(other_owner)?;

    let result = TrainerService::new(db)
        .add(&other_owner, &fixture.trainer_user.email, None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Trainer already assigned to another gym"
    ));

    Ok(())
}

/// Tests adding an account whose role is not Trainer.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_non_trainer_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::create_gym(db).await?;
    let member = factory::create_user(db).await?;
    let owner = User::from_entity(owner)?;

    let result = TrainerService::new(db).add(&owner, &member.email, None).await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg))
            if msg == "Trainer email must correspond to an existing Trainer user"
    ));

    Ok(())
}
