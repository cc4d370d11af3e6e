//! Member factory for adding members to a gym roster.

use crate::factory::user::create_user_with_role;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating member roster rows for an existing account.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    gym_id: i32,
    contact_number: Option<String>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory.
    ///
    /// Defaults:
    /// - contact_number: `"555-0000"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, gym_id: i32) -> Self {
        Self {
            db,
            user_id,
            gym_id,
            contact_number: Some("555-0000".to_string()),
        }
    }

    pub fn contact_number(mut self, contact_number: Option<String>) -> Self {
        self.contact_number = contact_number;
        self
    }

    /// Builds and inserts the member row into the database.
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            gym_id: ActiveValue::Set(self.gym_id),
            contact_number: ActiveValue::Set(self.contact_number),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Member account and puts it on the roster of `gym_id`.
///
/// # Returns
/// - `Ok((account, member))` - The member account and roster row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_member(
    db: &DatabaseConnection,
    gym_id: i32,
) -> Result<(entity::user::Model, entity::member::Model), DbErr> {
    let user = create_user_with_role(db, "Member").await?;
    let member = MemberFactory::new(db, user.id, gym_id).build().await?;

    Ok((user, member))
}
