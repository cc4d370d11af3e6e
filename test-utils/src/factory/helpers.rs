//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// A gym with one trainer and one member, each backed by an account.
pub struct GymFixture {
    pub owner: entity::user::Model,
    pub gym: entity::gym::Model,
    pub trainer_user: entity::user::Model,
    pub trainer: entity::trainer::Model,
    pub member_user: entity::user::Model,
    pub member: entity::member::Model,
}

/// Creates a gym with its owner account, one trainer and one member.
///
/// Requires the tables added by `TestBuilder::with_gym_tables()`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(GymFixture)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_gym_with_roster(db: &DatabaseConnection) -> Result<GymFixture, DbErr> {
    let (owner, gym) = crate::factory::gym::create_gym(db).await?;
    let (trainer_user, trainer) = crate::factory::trainer::create_trainer(db, gym.id).await?;
    let (member_user, member) = crate::factory::member::create_member(db, gym.id).await?;

    Ok(GymFixture {
        owner,
        gym,
        trainer_user,
        trainer,
        member_user,
        member,
    })
}
