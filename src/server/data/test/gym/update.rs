use super::*;

/// Tests a partial update.
///
/// Verifies that supplied fields change, absent fields keep their values and
/// a supplied photo list replaces the stored one.
///
/// Expected: Ok(Some) with the merged gym
#[tokio::test]
async fn merges_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym(db).await?;
    factory::gym::create_gym_photo(db, gym.id, "old.jpg", 0).await?;
    factory::gym::create_membership_plan(db, gym.id, "Monthly", 49.0, 30).await?;

    let updated = GymRepository::new(db)
        .update(
            gym.id,
            UpdateGymParams {
                name: Some("Renamed".to_string()),
                photos: Some(vec!["new.jpg".to_string()]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.address, gym.address);
    assert_eq!(updated.photos, vec!["new.jpg"]);
    assert_eq!(updated.membership_plans.len(), 1);

    Ok(())
}

/// Tests updating a gym that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_gym() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GymRepository::new(db)
        .update(9999, UpdateGymParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
