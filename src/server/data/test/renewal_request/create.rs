use super::*;

/// Tests opening a renewal request for a membership.
///
/// Expected: Ok with a pending request carrying the membership's member and gym
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_gym_with_roster(db).await?;
    let membership = Membership::from_entity(factory::create_membership(db, &fixture.member).await?);

    let repo = RenewalRequestRepository::new(db);
    let request = repo.create(&membership).await?;

    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.member_id, fixture.member.id);
    assert_eq!(request.gym_id, fixture.gym.id);
    assert_eq!(
        repo.find_pending_by_membership(membership.id).await?,
        Some(request)
    );

    Ok(())
}

/// Tests listing a gym's pending renewals with the current expiry date.
///
/// Expected: Ok with the request, member account and expiry date
#[tokio::test]
async fn lists_pending_with_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_gym_with_roster(db).await?;
    let membership = factory::create_membership(db, &fixture.member).await?;
    factory::create_renewal_request(db, &membership).await?;

    let requests = RenewalRequestRepository::new(db)
        .get_pending_by_gym_with_members(fixture.gym.id)
        .await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].user.id, fixture.member_user.id);
    assert_eq!(requests[0].expiry_date, membership.expiry_date);

    Ok(())
}

/// Tests that the schema allows one pending renewal per membership.
///
/// Expected: unique violation while pending, Ok after settling
#[tokio::test]
async fn one_pending_renewal_per_membership() -> Result<(), DbErr> {
    use sea_orm::SqlErr;

    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_gym_with_roster(db).await?;
    let membership = Membership::from_entity(factory::create_membership(db, &fixture.member).await?);

    let repo = RenewalRequestRepository::new(db);
    let first = repo.create(&membership).await?;
    let duplicate = repo.create(&membership).await;

    assert!(matches!(
        duplicate.map_err(|e| e.sql_err()),
        Err(Some(SqlErr::UniqueConstraintViolation(_)))
    ));

    assert!(repo.settle(first.id, RequestStatus::Accepted).await?);
    let again = repo.create(&membership).await?;

    assert_eq!(again.status, RequestStatus::Pending);

    Ok(())
}
