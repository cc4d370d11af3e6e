use super::*;

/// Tests storing a message.
///
/// Expected: Ok with sender, recipient, gym and content stored
#[tokio::test]
async fn stores_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_gym_with_roster(db).await?;

    let message = MessageRepository::new(db)
        .create(CreateMessageParams {
            sender_id: fixture.member_user.id,
            recipient_id: fixture.trainer_user.id,
            gym_id: fixture.gym.id,
            content: "When is leg day?".to_string(),
        })
        .await?;

    assert_eq!(message.sender_id, fixture.member_user.id);
    assert_eq!(message.recipient_id, fixture.trainer_user.id);
    assert_eq!(message.gym_id, Some(fixture.gym.id));
    assert_eq!(message.content, "When is leg day?");

    Ok(())
}
