use super::*;

/// Tests the directory as seen by a Member account with one pending request.
///
/// Expected: only the requested gym is flagged as pending
#[tokio::test]
async fn flags_gyms_with_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, requested) = factory::create_gym(db).await?;
    let (_, other) = factory::create_gym(db).await?;
    let applicant = factory::create_user(db).await?;
    factory::create_join_request(db, applicant.id, requested.id).await?;

    let applicant = User::from_entity(applicant)?;
    let entries = GymService::new(db).directory(&applicant).await?;

    assert_eq!(entries.len(), 2);
    for entry in entries {
        let expected = entry.detail.gym.id == requested.id;
        assert_eq!(entry.has_pending_request, expected);
        assert!(entry.detail.gym.id == requested.id || entry.detail.gym.id == other.id);
    }

    Ok(())
}

/// Tests the directory as seen by a gym owner.
///
/// Expected: every entry carries the roster and no pending flag
#[tokio::test]
async fn includes_roster_for_staff() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;

    let owner = User::from_entity(fixture.owner)?;
    let entries = GymService::new(db).directory(&owner).await?;

    assert_eq!(entries.len(), 1);
    assert!(!entries[0].has_pending_request);
    assert_eq!(entries[0].detail.trainers.len(), 1);
    assert_eq!(entries[0].detail.members.len(), 1);

    Ok(())
}
