use super::*;

/// Tests listing a gym's trainers with their accounts.
///
/// Verifies that trainers of other gyms are excluded.
///
/// Expected: Ok with the single trainer of the gym
#[tokio::test]
async fn lists_only_gym_trainers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym(db).await?;
    let (_, other_gym) = factory::create_gym(db).await?;
    let (user, trainer) = factory::create_trainer(db, gym.id).await?;
    factory::create_trainer(db, other_gym.id).await?;

    let repo = TrainerRepository::new(db);
    let trainers = repo.get_by_gym_with_users(gym.id).await?;

    assert_eq!(trainers.len(), 1);
    assert_eq!(trainers[0].trainer.id, trainer.id);
    assert_eq!(trainers[0].user.email, user.email);
    assert_eq!(repo.count_by_gym(gym.id).await?, 1);

    Ok(())
}
