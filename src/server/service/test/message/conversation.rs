use super::*;

/// Tests the member view of the conversation.
///
/// Verifies that both directions are included oldest first and that messages
/// with accounts outside the gym's trainer roster are left out.
///
/// Expected: Ok(Conversation) with the gym's trainers and two messages
#[tokio::test]
async fn member_sees_exchange_with_trainers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let outsider = factory::create_user(db).await?;
    let now = Utc::now();

    factory::message::create_message_at(
        db,
        fixture.trainer_user.id,
        fixture.member_user.id,
        fixture.gym.id,
        "Reply",
        now,
    )
    .await?;
    factory::message::create_message_at(
        db,
        fixture.member_user.id,
        fixture.trainer_user.id,
        fixture.gym.id,
        "Question",
        now - Duration::minutes(5),
    )
    .await?;
    factory::message::create_message_at(
        db,
        outsider.id,
        fixture.member_user.id,
        fixture.gym.id,
        "Spam",
        now,
    )
    .await?;

    let member = User::from_entity(fixture.member_user)?;
    let conversation = MessageService::new(db).member_conversation(&member).await?;

    assert_eq!(conversation.counterparts.len(), 1);
    assert_eq!(conversation.counterparts[0].id, fixture.trainer_user.id);
    let contents: Vec<&str> = conversation
        .messages
        .iter()
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(contents, vec!["Question", "Reply"]);

    Ok(())
}

/// Tests the trainer view of the conversation.
///
/// Expected: Ok(Conversation) listing the gym's members
#[tokio::test]
async fn trainer_sees_gym_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    factory::create_message(
        db,
        fixture.member_user.id,
        fixture.trainer_user.id,
        fixture.gym.id,
        "Hi",
    )
    .await?;

    let trainer = User::from_entity(fixture.trainer_user)?;
    let conversation = MessageService::new(db)
        .trainer_conversation(&trainer)
        .await?;

    assert_eq!(conversation.counterparts.len(), 1);
    assert_eq!(conversation.counterparts[0].id, fixture.member_user.id);
    assert_eq!(conversation.messages.len(), 1);

    Ok(())
}
