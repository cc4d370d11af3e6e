//! Join request repository.
//!
//! Requests are created `pending` and settled once. Settling is a conditional
//! update on the pending status, so two approvers racing on the same request
//! cannot both win.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashSet;

use crate::{
    model::request::RequestStatus,
    server::model::{
        request::{JoinRequest, JoinRequestWithUser},
        user::User,
    },
};

pub struct JoinRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JoinRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        gym_id: i32,
        contact_number: Option<String>,
    ) -> Result<JoinRequest, DbErr> {
        let now = Utc::now();
        let entity = entity::join_request::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            gym_id: ActiveValue::Set(Some(gym_id)),
            contact_number: ActiveValue::Set(contact_number),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        JoinRequest::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<JoinRequest>, DbErr> {
        entity::prelude::JoinRequest::find_by_id(id)
            .one(self.db)
            .await?
            .map(JoinRequest::from_entity)
            .transpose()
    }

    /// Finds a request by id with the requesting account.
    pub async fn find_with_user(&self, id: i32) -> Result<Option<JoinRequestWithUser>, DbErr> {
        let Some((request, user)) = entity::prelude::JoinRequest::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let user = user.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Account of join request {} not found", request.id))
        })?;

        Ok(Some(JoinRequestWithUser {
            request: JoinRequest::from_entity(request)?,
            user: User::from_entity(user)?,
        }))
    }

    /// Finds the pending request of an account for a gym, if any.
    pub async fn find_pending(
        &self,
        user_id: i32,
        gym_id: i32,
    ) -> Result<Option<JoinRequest>, DbErr> {
        entity::prelude::JoinRequest::find()
            .filter(entity::join_request::Column::UserId.eq(user_id))
            .filter(entity::join_request::Column::GymId.eq(gym_id))
            .filter(entity::join_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .one(self.db)
            .await?
            .map(JoinRequest::from_entity)
            .transpose()
    }

    /// Ids of every gym the account has a pending join request for.
    pub async fn pending_gym_ids_for_user(&self, user_id: i32) -> Result<HashSet<i32>, DbErr> {
        let requests = entity::prelude::JoinRequest::find()
            .filter(entity::join_request::Column::UserId.eq(user_id))
            .filter(entity::join_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .all(self.db)
            .await?;

        Ok(requests.into_iter().filter_map(|r| r.gym_id).collect())
    }

    /// Gets a gym's pending requests with the requesting accounts, oldest first.
    pub async fn get_pending_by_gym_with_users(
        &self,
        gym_id: i32,
    ) -> Result<Vec<JoinRequestWithUser>, DbErr> {
        let rows = entity::prelude::JoinRequest::find()
            .filter(entity::join_request::Column::GymId.eq(gym_id))
            .filter(entity::join_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .order_by_asc(entity::join_request::Column::CreatedAt)
            .order_by_asc(entity::join_request::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(request, user)| {
                let user = user.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Account of join request {} not found",
                        request.id
                    ))
                })?;

                Ok(JoinRequestWithUser {
                    request: JoinRequest::from_entity(request)?,
                    user: User::from_entity(user)?,
                })
            })
            .collect()
    }

    /// Moves a pending request to its final status.
    ///
    /// # Returns
    /// - `Ok(true)` - The request was pending and is now settled
    /// - `Ok(false)` - The request does not exist or was already settled
    pub async fn settle(&self, id: i32, status: RequestStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::JoinRequest::update_many()
            .col_expr(
                entity::join_request::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(entity::join_request::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::join_request::Column::Id.eq(id))
            .filter(entity::join_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
