use super::*;

/// Tests creating a gym with photos and a membership catalog.
///
/// Verifies that photos keep their submitted order and plans are returned
/// with the gym.
///
/// Expected: Ok with the full gym
#[tokio::test]
async fn creates_gym_with_photos_and_plans() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user_with_role(db, "Gym").await?;

    let repo = GymRepository::new(db);
    let gym = repo
        .create(CreateGymParams {
            owner_id: owner.id,
            name: "Iron Temple".to_string(),
            address: "1 Main Street".to_string(),
            owner_full_name: Some("Dana Lift".to_string()),
            owner_phone: None,
            photos: vec!["b.jpg".to_string(), "a.jpg".to_string()],
            membership_plans: vec![basic_plan("Monthly", 49.0), basic_plan("Student", 29.0)],
        })
        .await?;

    assert_eq!(gym.name, "Iron Temple");
    assert_eq!(gym.owner_id, owner.id);
    assert_eq!(gym.photos, vec!["b.jpg", "a.jpg"]);
    assert_eq!(gym.membership_plans.len(), 2);
    assert_eq!(gym.membership_plans[0].plan_name, "Monthly");

    let found = repo.find_by_owner(owner.id).await?;
    assert_eq!(found, Some(gym));

    Ok(())
}

/// Tests that an account owns at most one gym.
///
/// Expected: Err on the second gym for the same owner
#[tokio::test]
async fn rejects_second_gym_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::create_gym(db).await?;

    let result = GymRepository::new(db)
        .create(CreateGymParams {
            owner_id: owner.id,
            name: "Second".to_string(),
            address: "2 Main Street".to_string(),
            owner_full_name: None,
            owner_phone: None,
            photos: vec![],
            membership_plans: vec![],
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
