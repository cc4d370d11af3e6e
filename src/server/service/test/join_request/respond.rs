use super::*;

/// Tests accepting a join request.
///
/// Verifies that the applicant lands on the gym roster exactly once.
///
/// Expected: Ok(JoinRequestWithUser) with status accepted
#[tokio::test]
async fn accept_adds_member_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, gym) = factory::create_gym(db).await?;
    let applicant = factory::create_user(db).await?;
    let request = factory::create_join_request(db, applicant.id, gym.id).await?;

    let owner = User::from_entity(owner)?;
    let service = JoinRequestService::new(db);

    let settled = service
        .respond(&owner, request.id, RequestAction::Accept)
        .await?;
    let again = service
        .respond(&owner, request.id, RequestAction::Accept)
        .await;

    assert_eq!(settled.request.status, RequestStatus::Accepted);
    assert!(matches!(
        again,
        Err(AppError::BadRequest(msg)) if msg == "Request already processed"
    ));

    let rows = entity::prelude::Member::find()
        .filter(entity::member::Column::UserId.eq(applicant.id))
        .all(db)
        .await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].gym_id, gym.id);
    assert_eq!(rows[0].contact_number.as_deref(), Some("555-0101"));

    Ok(())
}

/// Tests rejecting a join request.
///
/// Expected: status rejected and no roster row
#[tokio::test]
async fn reject_leaves_roster_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, gym) = factory::create_gym(db).await?;
    let applicant = factory::create_user(db).await?;
    let request = factory::create_join_request(db, applicant.id, gym.id).await?;

    let owner = User::from_entity(owner)?;
    let settled = JoinRequestService::new(db)
        .respond(&owner, request.id, RequestAction::Reject)
        .await?;

    assert_eq!(settled.request.status, RequestStatus::Rejected);
    let members = entity::prelude::Member::find().count(db).await?;
    assert_eq!(members, 0);

    Ok(())
}

/// Tests accepting a request whose applicant joined another gym meanwhile.
///
/// Expected: Err(AppError::BadRequest) and the request stays pending
#[tokio::test]
async fn accept_fails_when_applicant_joined_elsewhere() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let (owner, gym) = factory::create_gym(db).await?;
    let request = factory::create_join_request(db, fixture.member_user.id, gym.id).await?;

    let owner = User::from_entity(owner)?;
    let result = JoinRequestService::new(db)
        .respond(&owner, request.id, RequestAction::Accept)
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "User is already a member of a gym"
    ));

    let stored = entity::prelude::JoinRequest::find_by_id(request.id)
        .one(db)
        .await?;
    assert!(stored.is_some_and(|r| r.status == "pending"));

    Ok(())
}

/// Tests a trainer of another gym responding to a request.
///
/// Expected: Err(AppError::NotFound("Join request not found"))
#[tokio::test]
async fn rejects_staff_of_another_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let (_, gym) = factory::create_gym(db).await?;
    let applicant = factory::create_user(db).await?;
    let request = factory::create_join_request(db, applicant.id, gym.id).await?;

    let trainer = User::from_entity(fixture.trainer_user)?;
    let result = JoinRequestService::new(db)
        .respond(&trainer, request.id, RequestAction::Accept)
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(msg)) if msg == "Join request not found"
    ));

    Ok(())
}
