use super::*;

/// Tests creating a membership for a member of the caller's gym.
///
/// Expected: Ok(Membership) in the caller's gym
#[tokio::test]
async fn creates_membership_for_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let join_date = Utc::now();

    let owner = User::from_entity(fixture.owner)?;
    let membership = MembershipService::new(db)
        .create(
            &owner,
            CreateMembershipParams {
                member_id: fixture.member.id,
                join_date,
                expiry_date: join_date + Duration::days(90),
            },
        )
        .await?;

    assert_eq!(membership.member_id, fixture.member.id);
    assert_eq!(membership.gym_id, fixture.gym.id);
    assert!(membership.expiry_date > membership.join_date);

    Ok(())
}

/// Tests creating a second membership for the same member.
///
/// Expected: Err(AppError::BadRequest("Member already has an active membership"))
#[tokio::test]
async fn rejects_second_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    factory::create_membership(db, &fixture.member).await?;
    let join_date = Utc::now();

    let owner = User::from_entity(fixture.owner)?;
    let result = MembershipService::new(db)
        .create(
            &owner,
            CreateMembershipParams {
                member_id: fixture.member.id,
                join_date,
                expiry_date: join_date + Duration::days(30),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Member already has an active membership"
    ));

    Ok(())
}

/// Tests creating a membership for a member of another gym.
///
/// Expected: Err(AppError::BadRequest("Member not found in your gym"))
#[tokio::test]
async fn rejects_member_of_another_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let (other_owner, _) = factory::create_gym(db).await?;
    let join_date = Utc::now();

    let other_owner = User::from_entity(other_owner)?;
    let result = MembershipService::new(db)
        .create(
            &other_owner,
            CreateMembershipParams {
                member_id: fixture.member.id,
                join_date,
                expiry_date: join_date + Duration::days(30),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Member not found in your gym"
    ));

    Ok(())
}
