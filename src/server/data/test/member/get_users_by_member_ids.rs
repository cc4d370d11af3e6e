use super::*;

/// Tests resolving member roster ids to accounts.
///
/// Expected: Ok with the account keyed by member id
#[tokio::test]
async fn maps_member_ids_to_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym(db).await?;
    let (first_user, first) = factory::create_member(db, gym.id).await?;
    let (second_user, second) = factory::create_member(db, gym.id).await?;

    let users = MemberRepository::new(db)
        .get_users_by_member_ids(&[first.id, second.id])
        .await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[&first.id].id, first_user.id);
    assert_eq!(users[&second.id].id, second_user.id);

    Ok(())
}
