//! Member roster management for gym staff.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::Role,
    server::{
        data::{
            member::MemberRepository, membership::MembershipRepository, plan::PlanRepository,
            plan_request::PlanRequestRepository, renewal_request::RenewalRequestRepository,
            user::UserRepository,
        },
        error::{internal::InternalError, AppError},
        model::{
            member::{CreateMemberParams, Member, MemberWithUser},
            user::{normalize_email, User},
        },
        service::scope::GymScope,
        util::parse::non_blank,
    },
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an existing Member account to the staff caller's gym.
    ///
    /// # Returns
    /// - `Ok(MemberWithUser)` - The new roster row with its account
    /// - `Err(AppError::BadRequest)` - Missing fields, no such Member account,
    ///   or the account is already on a roster
    pub async fn add(
        &self,
        staff: &User,
        member_email: &str,
        contact_number: String,
    ) -> Result<MemberWithUser, AppError> {
        let email = normalize_email(member_email);
        let contact_number = non_blank(Some(contact_number));
        if email.is_empty() || contact_number.is_none() {
            return Err(AppError::bad_request(
                "Member email and contact number are required",
            ));
        }

        let gym_id = GymScope::new(self.db).staff_gym_id(staff).await?;

        let user = UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .filter(|user| user.role == Role::Member)
            .ok_or_else(|| {
                AppError::bad_request("Member email must correspond to an existing Member user")
            })?;

        let repo = MemberRepository::new(self.db);
        if let Some(existing) = repo.find_by_user_id(user.id).await? {
            let message = if existing.gym_id == gym_id {
                "Member already in this gym"
            } else {
                "Member already belongs to another gym"
            };
            return Err(AppError::bad_request(message));
        }

        let member = repo
            .create(CreateMemberParams {
                user_id: user.id,
                gym_id,
                contact_number,
            })
            .await?;

        tracing::info!("Added member {} to gym {}", member.id, gym_id);

        Ok(MemberWithUser { member, user })
    }

    pub async fn list(&self, staff: &User) -> Result<Vec<MemberWithUser>, AppError> {
        let gym_id = GymScope::new(self.db).staff_gym_id(staff).await?;

        Ok(MemberRepository::new(self.db)
            .get_by_gym_with_users(gym_id)
            .await?)
    }

    /// Updates the contact number of a member in the caller's gym.
    pub async fn update(
        &self,
        staff: &User,
        id: i32,
        contact_number: Option<String>,
    ) -> Result<MemberWithUser, AppError> {
        let mut member = self.find_in_staff_gym(staff, id).await?;

        if let Some(contact_number) = non_blank(contact_number) {
            member = MemberRepository::new(self.db)
                .update_contact_number(member.id, Some(contact_number))
                .await?;
        }

        let user = UserRepository::new(self.db)
            .find_by_id(member.user_id)
            .await?
            .ok_or(InternalError::MissingAfterWrite {
                entity: "Member account",
                id: member.user_id,
            })?;

        Ok(MemberWithUser { member, user })
    }

    /// Removes a member from the caller's gym together with their plans,
    /// plan requests, renewal requests and membership.
    ///
    /// Messages exchanged with the member are kept.
    pub async fn remove(&self, staff: &User, id: i32) -> Result<(), AppError> {
        let member = self.find_in_staff_gym(staff, id).await?;

        let txn = self.db.begin().await?;
        let plans = PlanRepository::new(&txn).delete_by_member(member.id).await?;
        PlanRequestRepository::new(&txn)
            .delete_by_member(member.id)
            .await?;
        RenewalRequestRepository::new(&txn)
            .delete_by_member(member.id)
            .await?;
        MembershipRepository::new(&txn)
            .delete_by_member(member.id)
            .await?;
        MemberRepository::new(&txn).delete(member.id).await?;
        txn.commit().await?;

        tracing::info!(
            "Removed member {} from gym {} with {} plans",
            member.id,
            member.gym_id,
            plans
        );

        Ok(())
    }

    async fn find_in_staff_gym(&self, staff: &User, id: i32) -> Result<Member, AppError> {
        let gym_id = GymScope::new(self.db).staff_gym_id(staff).await?;

        MemberRepository::new(self.db)
            .find_in_gym(id, gym_id)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found in your gym"))
    }
}
