use super::*;

/// Tests a trainer writing a plan for a member of their gym.
///
/// Expected: Ok(Plan) authored by the trainer
#[tokio::test]
async fn creates_plan_for_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;

    let trainer = User::from_entity(fixture.trainer_user)?;
    let plan = PlanService::new(db)
        .create(
            &trainer,
            NewPlanInput {
                plan_type: PlanType::Diet,
                content: "High protein".to_string(),
                member_id: fixture.member.id,
                week: 4,
            },
        )
        .await?;

    assert_eq!(plan.trainer_id, Some(fixture.trainer.id));
    assert_eq!(plan.member_id, fixture.member.id);
    assert_eq!(plan.plan_type, PlanType::Diet);
    assert_eq!(plan.week, 4);

    Ok(())
}

/// Tests writing a second plan of the same type and week.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_week_and_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    factory::create_plan(db, fixture.trainer.id, fixture.member.id).await?;

    let trainer = User::from_entity(fixture.trainer_user)?;
    let result = PlanService::new(db)
        .create(
            &trainer,
            NewPlanInput {
                plan_type: PlanType::Workout,
                content: "Again".to_string(),
                member_id: fixture.member.id,
                week: 1,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests writing a plan for a member of another gym.
///
/// Expected: Err(AppError::BadRequest("Member not found in your gym"))
#[tokio::test]
async fn rejects_member_of_another_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let (_, other_gym) = factory::create_gym(db).await?;
    let (other_trainer, _) = factory::create_trainer(db, other_gym.id).await?;

    let other_trainer = User::from_entity(other_trainer)?;
    let result = PlanService::new(db)
        .create(
            &other_trainer,
            NewPlanInput {
                plan_type: PlanType::Workout,
                content: "Squats".to_string(),
                member_id: fixture.member.id,
                week: 2,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Member not found in your gym"
    ));

    Ok(())
}

/// Tests two plans of the same type and week written at the same time.
///
/// Expected: exactly one is stored, the other fails with the duplicate message
#[tokio::test]
async fn concurrent_creates_store_one_plan() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;

    let trainer = User::from_entity(fixture.trainer_user)?;
    let service = PlanService::new(db);
    let input = || NewPlanInput {
        plan_type: PlanType::Workout,
        content: "Squats".to_string(),
        member_id: fixture.member.id,
        week: 2,
    };
    let (first, second) = tokio::join!(
        service.create(&trainer, input()),
        service.create(&trainer, input())
    );

    let (created, refused): (Vec<_>, Vec<_>) = [first, second].into_iter().partition(Result::is_ok);
    assert_eq!(created.len(), 1);
    assert!(refused.into_iter().all(|result| matches!(
        result,
        Err(AppError::BadRequest(msg))
            if msg == "A plan of this type already exists for this member and week"
    )));
    assert_eq!(entity::prelude::Plan::find().count(db).await?, 1);

    Ok(())
}
