use super::*;

/// Tests putting a member account on a gym roster.
///
/// Expected: Ok with the roster row, found by account and by gym
#[tokio::test]
async fn creates_roster_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym(db).await?;
    let user = factory::create_user(db).await?;

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParams {
            user_id: user.id,
            gym_id: gym.id,
            contact_number: Some("555-9876".to_string()),
        })
        .await?;

    assert_eq!(member.gym_id, gym.id);
    assert_eq!(repo.find_by_user_id(user.id).await?, Some(member.clone()));
    assert_eq!(
        repo.find_by_user_in_gym(user.id, gym.id).await?,
        Some(member)
    );

    Ok(())
}

/// Tests that an account sits on at most one member roster.
///
/// Expected: Err when adding the account a second time
#[tokio::test]
async fn rejects_duplicate_membership_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym(db).await?;
    let (user, _) = factory::create_member(db, gym.id).await?;

    let result = MemberRepository::new(db)
        .create(CreateMemberParams {
            user_id: user.id,
            gym_id: gym.id,
            contact_number: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
