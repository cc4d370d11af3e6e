use super::*;

/// Tests a member writing to a trainer of their gym.
///
/// Expected: Ok(Message) scoped to the gym
#[tokio::test]
async fn member_writes_to_own_trainer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;

    let member = User::from_entity(fixture.member_user)?;
    let message = MessageService::new(db)
        .send(&member, Some(fixture.trainer_user.id), "Hi coach".to_string())
        .await?;

    assert_eq!(message.sender_id, member.id);
    assert_eq!(message.recipient_id, fixture.trainer_user.id);
    assert_eq!(message.gym_id, Some(fixture.gym.id));
    assert_eq!(message.content, "Hi coach");

    Ok(())
}

/// Tests a member writing to a trainer of another gym.
///
/// Expected: Err(AppError::NotFound("Recipient not found in your gym"))
#[tokio::test]
async fn rejects_recipient_of_another_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let (_, other_gym) = factory::create_gym(db).await?;
    let (stranger, _) = factory::create_trainer(db, other_gym.id).await?;

    let member = User::from_entity(fixture.member_user)?;
    let result = MessageService::new(db)
        .send(&member, Some(stranger.id), "Hello?".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(msg)) if msg == "Recipient not found in your gym"
    ));

    Ok(())
}

/// Tests a trainer writing to a colleague rather than a member.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn trainer_cannot_write_to_trainer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let (colleague, _) = factory::create_trainer(db, fixture.gym.id).await?;

    let trainer = User::from_entity(fixture.trainer_user)?;
    let result = MessageService::new(db)
        .send(&trainer, Some(colleague.id), "Shift swap?".to_string())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests sending without content and sending from a gym owner account.
///
/// Expected: BadRequest for the blank message, AccessDenied for the owner
#[tokio::test]
async fn rejects_blank_content_and_owner_sender() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let service = MessageService::new(db);

    let member = User::from_entity(fixture.member_user)?;
    let owner = User::from_entity(fixture.owner)?;

    assert!(matches!(
        service
            .send(&member, Some(fixture.trainer_user.id), "   ".to_string())
            .await,
        Err(AppError::BadRequest(msg)) if msg == "Recipient ID and content are required"
    ));
    assert!(matches!(
        service
            .send(&owner, Some(member.id), "Welcome".to_string())
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}
