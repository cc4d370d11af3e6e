use super::*;

/// Tests detecting an existing plan for a member, week and type.
///
/// Expected: true only for the matching week and type
#[tokio::test]
async fn matches_week_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_gym_with_roster(db).await?;
    factory::plan::PlanFactory::new(db, fixture.member.id)
        .plan_type("Workout")
        .week(1)
        .build()
        .await?;

    let repo = PlanRepository::new(db);

    assert!(repo
        .exists_for_week(fixture.member.id, 1, PlanType::Workout)
        .await?);
    assert!(!repo
        .exists_for_week(fixture.member.id, 1, PlanType::Diet)
        .await?);
    assert!(!repo
        .exists_for_week(fixture.member.id, 2, PlanType::Workout)
        .await?);

    Ok(())
}
