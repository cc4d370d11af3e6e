use super::*;

/// Tests listing gyms with their side tables.
///
/// Verifies ordering by name and that photos are attached to the right gym.
///
/// Expected: Ok with both gyms
#[tokio::test]
async fn lists_gyms_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zed_owner = factory::create_user_with_role(db, "Gym").await?;
    let zed = factory::gym::GymFactory::new(db, zed_owner.id)
        .name("Zed Fitness")
        .build()
        .await?;
    let alpha_owner = factory::create_user_with_role(db, "Gym").await?;
    let alpha = factory::gym::GymFactory::new(db, alpha_owner.id)
        .name("Alpha Barbell")
        .build()
        .await?;
    factory::gym::create_gym_photo(db, zed.id, "zed.jpg", 0).await?;

    let gyms = GymRepository::new(db).get_all().await?;

    assert_eq!(gyms.len(), 2);
    assert_eq!(gyms[0].id, alpha.id);
    assert!(gyms[0].photos.is_empty());
    assert_eq!(gyms[1].id, zed.id);
    assert_eq!(gyms[1].photos, vec!["zed.jpg"]);

    Ok(())
}

/// Tests listing with no gyms.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let gyms = GymRepository::new(db).get_all().await?;

    assert!(gyms.is_empty());

    Ok(())
}
