use super::*;

/// Tests creating a plan for a member.
///
/// Expected: Ok with the plan and parsed type
#[tokio::test]
async fn creates_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_gym_with_roster(db).await?;

    let repo = PlanRepository::new(db);
    let plan = repo
        .create(CreatePlanParams {
            plan_type: PlanType::Diet,
            content: "High protein".to_string(),
            trainer_id: Some(fixture.trainer.id),
            member_id: fixture.member.id,
            week: 3,
        })
        .await?;

    assert_eq!(plan.plan_type, PlanType::Diet);
    assert_eq!(plan.week, 3);
    assert_eq!(plan.trainer_id, Some(fixture.trainer.id));

    let plans = repo.get_by_member(fixture.member.id).await?;
    assert_eq!(plans, vec![plan]);

    Ok(())
}

/// Tests that the schema refuses a second plan of the same type and week.
///
/// Expected: unique violation for the same week and type, Ok for another type
#[tokio::test]
async fn one_plan_per_week_and_type() -> Result<(), DbErr> {
    use sea_orm::SqlErr;

    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_gym_with_roster(db).await?;
    factory::create_plan(db, fixture.trainer.id, fixture.member.id).await?;

    let repo = PlanRepository::new(db);
    let params = |plan_type| CreatePlanParams {
        plan_type,
        content: "Again".to_string(),
        trainer_id: Some(fixture.trainer.id),
        member_id: fixture.member.id,
        week: 1,
    };

    let duplicate = repo.create(params(PlanType::Workout)).await;
    assert!(matches!(
        duplicate.map_err(|e| e.sql_err()),
        Err(Some(SqlErr::UniqueConstraintViolation(_)))
    ));

    let diet = repo.create(params(PlanType::Diet)).await?;
    assert_eq!(diet.week, 1);

    Ok(())
}
