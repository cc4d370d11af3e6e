use super::*;

/// Tests replacing both dates of a membership.
///
/// Expected: Ok with the new dates stored and returned
#[tokio::test]
async fn replaces_join_and_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixture = factory::helpers::create_gym_with_roster(db).await?;
    let membership = factory::create_membership(db, &fixture.member).await?;
    let join_date = Utc::now() - Duration::days(10);
    let expiry_date = membership.expiry_date + Duration::days(30);

    let repo = MembershipRepository::new(db);
    let updated = repo
        .update_dates(membership.id, join_date, expiry_date)
        .await?;

    assert_eq!(updated.join_date, join_date);
    assert_eq!(updated.expiry_date, expiry_date);
    assert_eq!(repo.find_by_id(membership.id).await?, Some(updated));

    Ok(())
}
