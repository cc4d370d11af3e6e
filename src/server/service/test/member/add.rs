use super::*;

/// Tests a trainer adding a Member account to their gym.
///
/// Expected: Ok(MemberWithUser) on the trainer's gym roster
#[tokio::test]
async fn trainer_adds_member_to_own_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let account = factory::create_user(db).await?;

    let trainer = User::from_entity(fixture.trainer_user)?;
    let added = MemberService::new(db)
        .add(&trainer, &account.email, "555-0123".to_string())
        .await?;

    assert_eq!(added.member.gym_id, fixture.gym.id);
    assert_eq!(added.member.user_id, account.id);
    assert_eq!(added.member.contact_number.as_deref(), Some("555-0123"));

    Ok(())
}

/// Tests adding a member that is already on this gym's roster.
///
/// Expected: Err(AppError::BadRequest("Member already in this gym"))
#[tokio::test]
async fn rejects_member_already_in_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;

    let owner = User::from_entity(fixture.owner)?;
    let result = MemberService::new(db)
        .add(&owner, &fixture.member_user.email, "555-0123".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Member already in this gym"
    ));

    Ok(())
}

/// Tests adding a member without a contact number.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn requires_contact_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let account = factory::create_user(db).await?;

    let owner = User::from_entity(fixture.owner)?;
    let result = MemberService::new(db)
        .add(&owner, &account.email, "   ".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Member email and contact number are required"
    ));

    Ok(())
}
