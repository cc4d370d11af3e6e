use super::*;

/// Tests putting a trainer account on a gym roster.
///
/// Expected: Ok with the roster row
#[tokio::test]
async fn creates_roster_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym(db).await?;
    let user = factory::create_user_with_role(db, "Trainer").await?;

    let repo = TrainerRepository::new(db);
    let trainer = repo
        .create(user.id, gym.id, Some("555-1234".to_string()))
        .await?;

    assert_eq!(trainer.user_id, user.id);
    assert_eq!(trainer.gym_id, gym.id);
    assert_eq!(trainer.contact_number.as_deref(), Some("555-1234"));
    assert_eq!(repo.find_by_user_id(user.id).await?, Some(trainer));

    Ok(())
}

/// Tests that an account sits on at most one trainer roster.
///
/// Expected: Err when adding the same account to a second gym
#[tokio::test]
async fn rejects_account_on_two_rosters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first_gym) = factory::create_gym(db).await?;
    let (_, second_gym) = factory::create_gym(db).await?;
    let (user, _) = factory::create_trainer(db, first_gym.id).await?;

    let result = TrainerRepository::new(db)
        .create(user.id, second_gym.id, None)
        .await;

    assert!(result.is_err());

    Ok(())
}
