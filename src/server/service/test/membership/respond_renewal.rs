use super::*;

/// Tests accepting a renewal request.
///
/// Verifies that the expiry moves forward by exactly the renewal period from
/// its previous value.
///
/// Expected: Ok(RenewalRequestWithMember) with status accepted
#[tokio::test]
async fn accept_extends_expiry_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let membership = factory::create_membership(db, &fixture.member).await?;
    let request = factory::create_renewal_request(db, &membership).await?;

    let owner = User::from_entity(fixture.owner)?;
    let settled = MembershipService::new(db)
        .respond_renewal(&owner, request.id, RequestAction::Accept)
        .await?;

    assert_eq!(settled.request.status, RequestStatus::Accepted);
    assert_eq!(
        settled.expiry_date,
        membership.expiry_date + Duration::days(RENEWAL_EXTENSION_DAYS)
    );

    Ok(())
}

/// Tests responding twice to the same renewal request.
///
/// Expected: second call fails with "Request already processed" and the
/// expiry is extended only once
#[tokio::test]
async fn second_response_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let membership = factory::create_membership(db, &fixture.member).await?;
    let request = factory::create_renewal_request(db, &membership).await?;

    let trainer = User::from_entity(fixture.trainer_user)?;
    let service = MembershipService::new(db);

    service
        .respond_renewal(&trainer, request.id, RequestAction::Accept)
        .await?;
    let second = service
        .respond_renewal(&trainer, request.id, RequestAction::Accept)
        .await;

    assert!(matches!(
        second,
        Err(AppError::BadRequest(msg)) if msg == "Request already processed"
    ));

    let memberships = service.list(&trainer).await?;
    assert_eq!(
        memberships[0].membership.expiry_date,
        membership.expiry_date + Duration::days(RENEWAL_EXTENSION_DAYS)
    );

    Ok(())
}

/// Tests rejecting a renewal request.
///
/// Expected: status rejected and the expiry unchanged
#[tokio::test]
async fn reject_keeps_expiry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let membership = factory::create_membership(db, &fixture.member).await?;
    let request = factory::create_renewal_request(db, &membership).await?;

    let owner = User::from_entity(fixture.owner)?;
    let settled = MembershipService::new(db)
        .respond_renewal(&owner, request.id, RequestAction::Reject)
        .await?;

    assert_eq!(settled.request.status, RequestStatus::Rejected);
    assert_eq!(settled.expiry_date, membership.expiry_date);

    Ok(())
}

/// Tests responding to a renewal request of another gym.
///
/// Expected: Err(AppError::NotFound("Renewal request not found"))
#[tokio::test]
async fn rejects_request_of_another_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let membership = factory::create_membership(db, &fixture.member).await?;
    let request = factory::create_renewal_request(db, &membership).await?;
    let (other_owner, _) = factory::create_gym(db).await?;

    let other_owner = User::from_entity(other_owner)?;
    let result = MembershipService::new(db)
        .respond_renewal(&other_owner, request.id, RequestAction::Accept)
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(msg)) if msg == "Renewal request not found"
    ));

    Ok(())
}

/// Tests accepting a renewal of a membership that already expires at the far
/// end of the supported date range.
///
/// Expected: Err(AppError::BadRequest) and the request stays pending with the
/// expiry unchanged
#[tokio::test]
async fn accept_rejects_expiry_out_of_range() -> Result<(), AppError> {
    use chrono::TimeZone;
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let far_expiry = Utc.with_ymd_and_hms(262142, 12, 20, 0, 0, 0).unwrap();
    let membership =
        factory::membership::MembershipFactory::new(db, fixture.member.id, fixture.gym.id)
            .expiry_date(far_expiry)
            .build()
            .await?;
    let request = factory::create_renewal_request(db, &membership).await?;

    let owner = User::from_entity(fixture.owner)?;
    let result = MembershipService::new(db)
        .respond_renewal(&owner, request.id, RequestAction::Accept)
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Membership expiry cannot be extended further"
    ));
    let stored = entity::prelude::RenewalRequest::find_by_id(request.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "pending");
    let stored = entity::prelude::Membership::find_by_id(membership.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.expiry_date, far_expiry);

    Ok(())
}
