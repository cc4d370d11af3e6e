use super::*;

/// Tests settling a pending request.
///
/// Expected: Ok(true) and the stored status updated
#[tokio::test]
async fn settles_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym(db).await?;
    let user = factory::create_user(db).await?;
    let request = factory::create_join_request(db, user.id, gym.id).await?;

    let repo = JoinRequestRepository::new(db);
    let settled = repo.settle(request.id, RequestStatus::Accepted).await?;

    assert!(settled);
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, RequestStatus::Accepted);

    Ok(())
}

/// Tests that a settled request cannot be settled again.
///
/// Expected: Ok(false) and the first status kept
#[tokio::test]
async fn refuses_to_settle_twice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym(db).await?;
    let user = factory::create_user(db).await?;
    let request = factory::create_join_request(db, user.id, gym.id).await?;

    let repo = JoinRequestRepository::new(db);
    assert!(repo.settle(request.id, RequestStatus::Rejected).await?);
    let second = repo.settle(request.id, RequestStatus::Accepted).await?;

    assert!(!second);
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, RequestStatus::Rejected);

    Ok(())
}
