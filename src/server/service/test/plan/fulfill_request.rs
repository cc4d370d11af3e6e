use super::*;

/// Tests fulfilling a pending plan request.
///
/// Verifies that exactly one plan is created and linked to the request.
///
/// Expected: Ok(PlanRequestWithMember) with status fulfilled
#[tokio::test]
async fn creates_one_plan_and_links_it() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let request = factory::create_plan_request(db, &fixture.member, "Diet", 3).await?;

    let trainer = User::from_entity(fixture.trainer_user)?;
    let service = PlanService::new(db);

    let fulfilled = service
        .fulfill_request(&trainer, request.id, "Oats and eggs".to_string())
        .await?;
    let again = service
        .fulfill_request(&trainer, request.id, "Second helping".to_string())
        .await;

    assert_eq!(fulfilled.request.status, RequestStatus::Fulfilled);
    assert!(fulfilled.request.plan_id.is_some());
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    let plans = entity::prelude::Plan::find().count(db).await?;
    assert_eq!(plans, 1);

    Ok(())
}

/// Tests fulfilling a request with blank content.
///
/// Expected: Err(AppError::BadRequest("Content is required"))
#[tokio::test]
async fn requires_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let request = factory::create_plan_request(db, &fixture.member, "Workout", 1).await?;

    let trainer = User::from_entity(fixture.trainer_user)?;
    let result = PlanService::new(db)
        .fulfill_request(&trainer, request.id, " ".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Content is required"
    ));

    Ok(())
}

/// Tests fulfilling a request of another gym.
///
/// Expected: Err(AppError::NotFound("Plan request not found")) and no plan
#[tokio::test]
async fn rejects_request_of_another_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let request = factory::create_plan_request(db, &fixture.member, "Workout", 1).await?;
    let (_, other_gym) = factory::create_gym(db).await?;
    let (other_trainer, _) = factory::create_trainer(db, other_gym.id).await?;

    let other_trainer = User::from_entity(other_trainer)?;
    let result = PlanService::new(db)
        .fulfill_request(&other_trainer, request.id, "Lunges".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(msg)) if msg == "Plan request not found"
    ));
    assert_eq!(entity::prelude::Plan::find().count(db).await?, 0);

    Ok(())
}
