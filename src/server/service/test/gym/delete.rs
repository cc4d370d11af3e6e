use super::*;

/// Tests deleting a gym that still has a roster.
///
/// Expected: Err(AppError::BadRequest) and the gym and trainer are untouched
#[tokio::test]
async fn refuses_gym_with_roster() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let service = GymService::new(db);

    let result = service.delete(fixture.gym.id).await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg))
            if msg == "Remove the gym's trainers and members before deleting it"
    ));
    assert!(service.get_by_id(fixture.gym.id).await.is_ok());
    let trainer = entity::prelude::Trainer::find_by_id(fixture.trainer.id)
        .one(db)
        .await?;
    assert!(trainer.is_some());

    Ok(())
}

/// Tests that messages and join requests outlive the gym they were sent in.
///
/// Verifies that once the roster is gone the gym can be deleted while the
/// message history and join requests stay, with the gym reference cleared.
///
/// Expected: Ok(()), one message and one join request with no gym
#[tokio::test]
async fn keeps_messages_after_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = create_gym_with_roster(db).await?;
    let applicant = factory::create_user(db).await?;
    factory::create_message(
        db,
        fixture.member_user.id,
        fixture.trainer_user.id,
        fixture.gym.id,
        "See you Monday",
    )
    .await?;
    factory::create_join_request(db, applicant.id, fixture.gym.id).await?;

    TrainerRepository::new(db).delete(fixture.trainer.id).await?;
    MemberRepository::new(db).delete(fixture.member.id).await?;
    let service = GymService::new(db);

    service.delete(fixture.gym.id).await?;

    assert!(matches!(
        service.get_by_id(fixture.gym.id).await,
        Err(AppError::NotFound(_))
    ));
    let messages = entity::prelude::Message::find().all(db).await?;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].gym_id, None);
    assert_eq!(messages[0].content, "See you Monday");
    let requests = entity::prelude::JoinRequest::find().all(db).await?;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].gym_id, None);

    Ok(())
}

/// Tests deleting a gym that does not exist.
///
/// Expected: Err(AppError::NotFound("Gym not found"))
#[tokio::test]
async fn reports_missing_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GymService::new(db).delete(404).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Gym not found"));

    Ok(())
}
