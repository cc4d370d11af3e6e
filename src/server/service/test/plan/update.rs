use super::*;

/// Tests a trainer editing a plan written by a colleague.
///
/// Expected: Err(AppError::NotFound("Plan not found or not yours"))
#[tokio::test]
async fn rejects_plan_of_other_trainer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let (colleague, _) = factory::create_trainer(db, fixture.gym.id).await?;
    let plan = factory::create_plan(db, fixture.trainer.id, fixture.member.id).await?;

    let colleague = User::from_entity(colleague)?;
    let result = PlanService::new(db)
        .update(&colleague, plan.id, Some("Rewritten".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(msg)) if msg == "Plan not found or not yours"
    ));

    Ok(())
}

/// Tests editing a plan with blank content.
///
/// Expected: Ok(Plan) with the content unchanged
#[tokio::test]
async fn blank_content_keeps_plan() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let plan = factory::create_plan(db, fixture.trainer.id, fixture.member.id).await?;

    let trainer = User::from_entity(fixture.trainer_user)?;
    let service = PlanService::new(db);

    let unchanged = service
        .update(&trainer, plan.id, Some("  ".to_string()))
        .await?;
    let changed = service
        .update(&trainer, plan.id, Some("Deadlifts".to_string()))
        .await?;

    assert_eq!(unchanged.content, plan.content);
    assert_eq!(changed.content, "Deadlifts");

    Ok(())
}
