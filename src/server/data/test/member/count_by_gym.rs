use super::*;

/// Tests counting the member roster of a gym.
///
/// Expected: only members of the given gym are counted
#[tokio::test]
async fn counts_only_gym_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym(db).await?;
    let (_, other_gym) = factory::create_gym(db).await?;
    let (_, empty_gym) = factory::create_gym(db).await?;
    factory::create_member(db, gym.id).await?;
    factory::create_member(db, gym.id).await?;
    factory::create_member(db, other_gym.id).await?;

    let repo = MemberRepository::new(db);

    assert_eq!(repo.count_by_gym(gym.id).await?, 2);
    assert_eq!(repo.count_by_gym(empty_gym.id).await?, 0);

    Ok(())
}
