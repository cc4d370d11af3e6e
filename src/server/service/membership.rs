//! Membership management and the renewal approval workflow.

use chrono::Duration;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::request::RequestStatus,
    server::{
        data::{
            member::MemberRepository, membership::MembershipRepository,
            renewal_request::RenewalRequestRepository,
        },
        error::{internal::InternalError, AppError},
        model::{
            membership::{
                ensure_expiry_after_join, CreateMembershipParams, Membership,
                MembershipWithMember, UpdateMembershipParams,
            },
            request::{RenewalRequestWithMember, RequestAction},
            user::User,
        },
        service::scope::GymScope,
    },
};

/// Days added to a membership when a renewal is accepted.
pub const RENEWAL_EXTENSION_DAYS: i64 = 30;

pub struct MembershipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a membership for a member of the staff caller's gym.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The created membership
    /// - `Err(AppError::BadRequest)` - Member not in the gym or already holds
    ///   a membership
    pub async fn create(
        &self,
        staff: &User,
        params: CreateMembershipParams,
    ) -> Result<Membership, AppError> {
        let gym_id = GymScope::new(self.db).staff_gym_id(staff).await?;

        if MemberRepository::new(self.db)
            .find_in_gym(params.member_id, gym_id)
            .await?
            .is_none()
        {
            return Err(AppError::bad_request("Member not found in your gym"));
        }

        let repo = MembershipRepository::new(self.db);
        if repo.find_by_member_id(params.member_id).await?.is_some() {
            return Err(AppError::bad_request(
                "Member already has an active membership",
            ));
        }

        Ok(repo
            .create(gym_id, params)
            .await
            .map_err(AppError::duplicate("Member already has an active membership"))?)
    }

    pub async fn list(&self, staff: &User) -> Result<Vec<MembershipWithMember>, AppError> {
        let gym_id = GymScope::new(self.db).staff_gym_id(staff).await?;

        Ok(MembershipRepository::new(self.db)
            .get_by_gym_with_members(gym_id)
            .await?)
    }

    /// Replaces either date of a membership in the caller's gym.
    ///
    /// The resulting dates must still be ordered.
    pub async fn update(
        &self,
        staff: &User,
        id: i32,
        params: UpdateMembershipParams,
    ) -> Result<Membership, AppError> {
        let membership = self.find_in_staff_gym(staff, id).await?;

        let join_date = params.join_date.unwrap_or(membership.join_date);
        let expiry_date = params.expiry_date.unwrap_or(membership.expiry_date);
        ensure_expiry_after_join(join_date, expiry_date)?;

        Ok(MembershipRepository::new(self.db)
            .update_dates(membership.id, join_date, expiry_date)
            .await?)
    }

    pub async fn delete(&self, staff: &User, id: i32) -> Result<(), AppError> {
        let membership = self.find_in_staff_gym(staff, id).await?;

        MembershipRepository::new(self.db)
            .delete(membership.id)
            .await?;

        Ok(())
    }

    /// Pending renewal requests of the staff caller's gym.
    pub async fn pending_renewals(
        &self,
        staff: &User,
    ) -> Result<Vec<RenewalRequestWithMember>, AppError> {
        let gym_id = GymScope::new(self.db).staff_gym_id(staff).await?;

        Ok(RenewalRequestRepository::new(self.db)
            .get_pending_by_gym_with_members(gym_id)
            .await?)
    }

    /// Accepts or rejects a pending renewal request of the caller's gym.
    ///
    /// Acceptance extends the membership by `RENEWAL_EXTENSION_DAYS` from its
    /// current expiry date. The status change and the extension commit
    /// together.
    ///
    /// # Returns
    /// - `Ok(RenewalRequestWithMember)` - The settled request
    /// - `Err(AppError::NotFound)` - No such request in the caller's gym
    /// - `Err(AppError::BadRequest)` - The request was already settled, or the
    ///   extended expiry would leave the supported date range
    pub async fn respond_renewal(
        &self,
        staff: &User,
        request_id: i32,
        action: RequestAction,
    ) -> Result<RenewalRequestWithMember, AppError> {
        let gym_id = GymScope::new(self.db).staff_gym_id(staff).await?;

        let txn = self.db.begin().await?;
        let requests = RenewalRequestRepository::new(&txn);

        let request = requests
            .find_by_id(request_id)
            .await?
            .filter(|request| request.gym_id == gym_id)
            .ok_or_else(|| AppError::not_found("Renewal request not found"))?;

        if request.status != RequestStatus::Pending
            || !requests.settle(request.id, action.settled_status()).await?
        {
            return Err(AppError::bad_request("Request already processed"));
        }

        if action == RequestAction::Accept {
            let memberships = MembershipRepository::new(&txn);
            let membership = memberships
                .find_by_id(request.membership_id)
                .await?
                .ok_or_else(|| AppError::not_found("Membership not found"))?;
            let expiry_date =
                membership.renewed_expiry(Duration::days(RENEWAL_EXTENSION_DAYS))?;
            memberships
                .update_dates(membership.id, membership.join_date, expiry_date)
                .await?;
        }

        let settled = requests
            .find_with_member(request.id)
            .await?
            .ok_or(InternalError::MissingAfterWrite {
                entity: "Renewal request",
                id: request.id,
            })?;
        txn.commit().await?;

        tracing::debug!(
            "Renewal request {} of gym {} settled as {}",
            request.id,
            gym_id,
            settled.request.status
        );

        Ok(settled)
    }

    async fn find_in_staff_gym(&self, staff: &User, id: i32) -> Result<Membership, AppError> {
        let gym_id = GymScope::new(self.db).staff_gym_id(staff).await?;

        MembershipRepository::new(self.db)
            .find_in_gym(id, gym_id)
            .await?
            .ok_or_else(|| AppError::not_found("Membership not found in your gym"))
    }
}
