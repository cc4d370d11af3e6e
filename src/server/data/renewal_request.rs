use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::request::RequestStatus,
    server::{
        data::member::MemberRepository,
        model::{
            membership::Membership,
            request::{RenewalRequest, RenewalRequestWithMember},
        },
    },
};

pub struct RenewalRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RenewalRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens a pending renewal request for a membership.
    pub async fn create(&self, membership: &Membership) -> Result<RenewalRequest, DbErr> {
        let now = Utc::now();
        let entity = entity::renewal_request::ActiveModel {
            membership_id: ActiveValue::Set(membership.id),
            member_id: ActiveValue::Set(membership.member_id),
            gym_id: ActiveValue::Set(membership.gym_id),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        RenewalRequest::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<RenewalRequest>, DbErr> {
        entity::prelude::RenewalRequest::find_by_id(id)
            .one(self.db)
            .await?
            .map(RenewalRequest::from_entity)
            .transpose()
    }

    /// Finds a request by id with the member account and current expiry.
    pub async fn find_with_member(
        &self,
        id: i32,
    ) -> Result<Option<RenewalRequestWithMember>, DbErr> {
        let Some((request, membership)) = entity::prelude::RenewalRequest::find_by_id(id)
            .find_also_related(entity::prelude::Membership)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let membership = membership.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Membership of renewal request {} not found",
                request.id
            ))
        })?;
        let user = MemberRepository::new(self.db)
            .get_users_by_member_ids(&[request.member_id])
            .await?
            .remove(&request.member_id)
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Member account of renewal request {} not found",
                    request.id
                ))
            })?;

        Ok(Some(RenewalRequestWithMember {
            request: RenewalRequest::from_entity(request)?,
            user,
            expiry_date: membership.expiry_date,
        }))
    }

    pub async fn find_pending_by_membership(
        &self,
        membership_id: i32,
    ) -> Result<Option<RenewalRequest>, DbErr> {
        entity::prelude::RenewalRequest::find()
            .filter(entity::renewal_request::Column::MembershipId.eq(membership_id))
            .filter(entity::renewal_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .one(self.db)
            .await?
            .map(RenewalRequest::from_entity)
            .transpose()
    }

    /// Gets a gym's pending renewal requests with the member account and the
    /// membership's current expiry, oldest first.
    pub async fn get_pending_by_gym_with_members(
        &self,
        gym_id: i32,
    ) -> Result<Vec<RenewalRequestWithMember>, DbErr> {
        let rows = entity::prelude::RenewalRequest::find()
            .filter(entity::renewal_request::Column::GymId.eq(gym_id))
            .filter(entity::renewal_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .order_by_asc(entity::renewal_request::Column::CreatedAt)
            .order_by_asc(entity::renewal_request::Column::Id)
            .find_also_related(entity::prelude::Membership)
            .all(self.db)
            .await?;

        let member_ids: Vec<i32> = rows.iter().map(|(r, _)| r.member_id).collect();
        let users = MemberRepository::new(self.db)
            .get_users_by_member_ids(&member_ids)
            .await?;

        rows.into_iter()
            .map(|(request, membership)| {
                let membership = membership.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Membership of renewal request {} not found",
                        request.id
                    ))
                })?;
                let user = users.get(&request.member_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Member account of renewal request {} not found",
                        request.id
                    ))
                })?;

                Ok(RenewalRequestWithMember {
                    request: RenewalRequest::from_entity(request)?,
                    user,
                    expiry_date: membership.expiry_date,
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
        let result = entity::prelude::RenewalRequest::update_many()
            .col_expr(
                entity::renewal_request::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(
                entity::renewal_request::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::renewal_request::Column::Id.eq(id))
            .filter(entity::renewal_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn delete_by_member(&self, member_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RenewalRequest::delete_many()
            .filter(entity::renewal_request::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
