use super::*;

/// Tests removing a trainer who authored plans.
///
/// Verifies that the plans stay with the member and lose their author.
///
/// Expected: Ok(()), plan kept with no trainer
#[tokio::test]
async fn removes_trainer_and_detaches_plans() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let plan = factory::create_plan(db, fixture.trainer.id, fixture.member.id).await?;

    let owner = User::from_entity(fixture.owner)?;
    TrainerService::new(db)
        .remove(&owner, fixture.trainer.id)
        .await?;

    let trainer = entity::prelude::Trainer::find_by_id(fixture.trainer.id)
        .one(db)
        .await?;
    assert!(trainer.is_none());

    let plan = entity::prelude::Plan::find_by_id(plan.id).one(db).await?;
    assert!(plan.is_some_and(|plan| plan.trainer_id.is_none()));

    Ok(())
}

/// Tests removing a trainer of another gym.
///
/// Expected: Err(AppError::NotFound("Trainer not found in your gym"))
#[tokio::test]
async fn rejects_trainer_of_another_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let (other_owner, _) = factory::create_gym(db).await?;

    let other_owner = User::from_entity(other_owner)?;
    let result = TrainerService::new(db)
        .remove(&other_owner, fixture.trainer.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(msg)) if msg == "Trainer not found in your gym"
    ));

    Ok(())
}
