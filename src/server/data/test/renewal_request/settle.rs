use super::*;

/// Tests that a renewal request settles exactly once.
///
/// Expected: first settle Ok(true), second Ok(false)
#[tokio::test]
async fn settles_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_gym_with_roster(db).await?;
    let membership = factory::create_membership(db, &fixture.member).await?;
    let request = factory::create_renewal_request(db, &membership).await?;

    let repo = RenewalRequestRepository::new(db);

    assert!(repo.settle(request.id, RequestStatus::Accepted).await?);
    assert!(!repo.settle(request.id, RequestStatus::Rejected).await?);
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, RequestStatus::Accepted);

    Ok(())
}
