//! Join requests: Member accounts asking to be put on a gym's roster.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::request::RequestStatus,
    server::{
        data::{gym::GymRepository, join_request::JoinRequestRepository, member::MemberRepository},
        error::{internal::InternalError, AppError},
        model::{
            member::CreateMemberParams,
            request::{JoinRequestWithUser, RequestAction},
            user::User,
        },
        service::scope::GymScope,
        util::parse::non_blank,
    },
};

const DUPLICATE_JOIN_REQUEST: &str = "You already have a pending request for this gym";

pub struct JoinRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JoinRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a pending join request from the calling Member account.
    ///
    /// # Returns
    /// - `Ok(JoinRequestWithUser)` - The pending request
    /// - `Err(AppError::NotFound)` - No such gym
    /// - `Err(AppError::BadRequest)` - Missing gym id, caller already on a
    ///   roster, or a pending request for the gym already exists
    pub async fn join(
        &self,
        user: &User,
        gym_id: Option<i32>,
        contact_number: Option<String>,
    ) -> Result<JoinRequestWithUser, AppError> {
        let gym_id = gym_id.ok_or_else(|| AppError::bad_request("Gym ID is required"))?;

        if !GymRepository::new(self.db).exists(gym_id).await? {
            return Err(AppError::not_found("Gym not found"));
        }

        if MemberRepository::new(self.db)
            .find_by_user_id(user.id)
            .await?
            .is_some()
        {
            return Err(AppError::bad_request("You are already a member of a gym"));
        }

        let repo = JoinRequestRepository::new(self.db);
        if repo.find_pending(user.id, gym_id).await?.is_some() {
            return Err(AppError::bad_request(DUPLICATE_JOIN_REQUEST));
        }

        let request = repo
            .create(user.id, gym_id, non_blank(contact_number))
            .await
            .map_err(AppError::duplicate(DUPLICATE_JOIN_REQUEST))?;

        tracing::debug!("Account {} requested to join gym {}", user.id, gym_id);

        Ok(JoinRequestWithUser {
            request,
            user: user.clone(),
        })
    }

    /// Pending join requests of the staff caller's gym.
    pub async fn pending(&self, staff: &User) -> Result<Vec<JoinRequestWithUser>, AppError> {
        let gym_id = GymScope::new(self.db).staff_gym_id(staff).await?;

        Ok(JoinRequestRepository::new(self.db)
            .get_pending_by_gym_with_users(gym_id)
            .await?)
    }

    /// Accepts or rejects a pending join request of the caller's gym.
    ///
    /// Acceptance puts the requesting account on the member roster. The roster
    /// insert and the status change commit together.
    ///
    /// # Returns
    /// - `Ok(JoinRequestWithUser)` - The settled request
    /// - `Err(AppError::NotFound)` - No such request in the caller's gym
    /// - `Err(AppError::BadRequest)` - Request already settled, or the account
    ///   joined a gym in the meantime
    pub async fn respond(
        &self,
        staff: &User,
        request_id: i32,
        action: RequestAction,
    ) -> Result<JoinRequestWithUser, AppError> {
        let gym_id = GymScope::new(self.db).staff_gym_id(staff).await?;

        let txn = self.db.begin().await?;
        let requests = JoinRequestRepository::new(&txn);
        let members = MemberRepository::new(&txn);

        let request = requests
            .find_by_id(request_id)
            .await?
            .filter(|request| request.gym_id == Some(gym_id))
            .ok_or_else(|| AppError::not_found("Join request not found"))?;

        if request.status != RequestStatus::Pending {
            return Err(AppError::bad_request("Request already processed"));
        }

        if action == RequestAction::Accept
            && members.find_by_user_id(request.user_id).await?.is_some()
        {
            return Err(AppError::bad_request("User is already a member of a gym"));
        }

        if !requests.settle(request.id, action.settled_status()).await? {
            return Err(AppError::bad_request("Request already processed"));
        }

        if action == RequestAction::Accept {
            members
                .create(CreateMemberParams {
                    user_id: request.user_id,
                    gym_id,
                    contact_number: request.contact_number.clone(),
                })
                .await?;
        }

        let settled = requests
            .find_with_user(request.id)
            .await?
            .ok_or(InternalError::MissingAfterWrite {
                entity: "Join request",
                id: request.id,
            })?;
        txn.commit().await?;

        tracing::debug!(
            "Join request {} of gym {} settled as {}",
            request.id,
            gym_id,
            settled.request.status
        );

        Ok(settled)
    }
}
