use super::*;

/// Tests opening a plan request for a member.
///
/// Expected: Ok with a pending request in the member's gym
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_gym_with_roster(db).await?;
    let member = Member::from_entity(fixture.member.clone());

    let repo = PlanRequestRepository::new(db);
    let request = repo.create(&member, PlanType::Workout, 2).await?;

    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.gym_id, fixture.gym.id);
    assert_eq!(request.plan_id, None);
    assert_eq!(
        repo.find_pending(member.id, PlanType::Workout, 2).await?,
        Some(request)
    );
    assert!(repo
        .find_pending(member.id, PlanType::Diet, 2)
        .await?
        .is_none());

    Ok(())
}

/// Tests listing a gym's pending plan requests with member accounts.
///
/// Expected: Ok with the member's request
#[tokio::test]
async fn lists_pending_requests_for_gym() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_gym_with_roster(db).await?;
    factory::create_plan_request(db, &fixture.member, "Diet", 1).await?;

    let requests = PlanRequestRepository::new(db)
        .get_pending_by_gym_with_members(fixture.gym.id)
        .await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].request.plan_type, PlanType::Diet);
    assert_eq!(requests[0].user.id, fixture.member_user.id);

    Ok(())
}

/// Tests that the schema allows one pending plan request per week and type.
///
/// Expected: unique violation while pending, Ok after fulfilment
#[tokio::test]
async fn one_pending_request_per_week_and_type() -> Result<(), DbErr> {
    use sea_orm::SqlErr;

    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_gym_with_roster(db).await?;
    let member = Member::from_entity(fixture.member.clone());

    let repo = PlanRequestRepository::new(db);
    let first = repo.create(&member, PlanType::Workout, 2).await?;
    let duplicate = repo.create(&member, PlanType::Workout, 2).await;

    assert!(matches!(
        duplicate.map_err(|e| e.sql_err()),
        Err(Some(SqlErr::UniqueConstraintViolation(_)))
    ));

    let plan = factory::plan::PlanFactory::new(db, member.id)
        .week(2)
        .build()
        .await?;
    assert!(repo.fulfill(first.id, plan.id).await?);
    let again = repo.create(&member, PlanType::Workout, 2).await?;

    assert_eq!(again.status, RequestStatus::Pending);

    Ok(())
}
