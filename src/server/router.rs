use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageResponseDto, RespondDto},
        user::{UserDto, UserSummaryDto},
    },
    server::{
        controller::{
            auth::{self, login, me, signup},
            gym::{
                self, create_gym, create_my_gym, delete_gym, get_gym, get_gyms, get_my_gym,
                update_gym, update_my_gym,
            },
            gym_member::{
                self, get_gym_directory, get_join_requests, join_gym, respond_join_request,
            },
            health::{self, health},
            member::{self, add_member, get_members, remove_member, update_member},
            member_action::{
                self, get_gym_profile, get_my_membership, get_my_plans, get_trainer_gym,
                request_plan, request_renewal,
            },
            membership::{
                self, create_membership, delete_membership, get_memberships,
                get_renewal_requests, respond_renewal_request, update_membership,
            },
            message::{
                self, get_member_messages, get_trainer_messages, send_message,
            },
            plan::{
                self, create_plan, delete_plan, fulfill_plan_request, get_plan_requests,
                get_plans, update_plan,
            },
            trainer::{
                self, add_trainer, get_trainers, remove_trainer, update_trainer,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FitClub API",
        version = "0.1.0",
        description = "Gym management backend: gyms, trainer and member rosters, \
        memberships, workout and diet plans, approval requests and messaging.\n\n\
        Most endpoints require `Authorization: Bearer <token>` with a token \
        obtained from `/api/auth/signup` or `/api/auth/login`."
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "auth", description = "Account signup, login and identity"),
        (name = "gym", description = "Gym administration"),
        (name = "trainer", description = "Trainer roster of the caller's gym"),
        (name = "members", description = "Member roster of the caller's gym"),
        (name = "membership", description = "Memberships and renewal requests"),
        (name = "plan", description = "Workout and diet plans and plan requests"),
        (name = "gym-members", description = "Gym directory and join requests"),
        (name = "member", description = "Self-service for members and trainers"),
        (name = "messages", description = "Trainer and member messaging")
    ),
    paths(
        health::health,
        auth::signup,
        auth::login,
        auth::me,
        gym::create_gym,
        gym::get_gyms,
        gym::get_gym,
        gym::update_gym,
        gym::delete_gym,
        gym::get_my_gym,
        gym::create_my_gym,
        gym::update_my_gym,
        trainer::add_trainer,
        trainer::get_trainers,
        trainer::update_trainer,
        trainer::remove_trainer,
        member::add_member,
        member::get_members,
        member::update_member,
        member::remove_member,
        membership::create_membership,
        membership::get_memberships,
        membership::update_membership,
        membership::delete_membership,
        membership::get_renewal_requests,
        membership::respond_renewal_request,
        plan::create_plan,
        plan::get_plans,
        plan::update_plan,
        plan::delete_plan,
        plan::get_plan_requests,
        plan::fulfill_plan_request,
        gym_member::get_gym_directory,
        gym_member::join_gym,
        gym_member::get_join_requests,
        gym_member::respond_join_request,
        member_action::get_gym_profile,
        member_action::get_trainer_gym,
        member_action::request_plan,
        member_action::get_my_plans,
        member_action::get_my_membership,
        member_action::request_renewal,
        message::send_message,
        message::get_member_messages,
        message::get_trainer_messages,
    ),
    components(schemas(ErrorDto, MessageResponseDto, RespondDto, UserDto, UserSummaryDto)),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/gyms", get(get_gyms).post(create_gym))
        .route(
            "/api/gyms/my-gym",
            get(get_my_gym).post(create_my_gym).put(update_my_gym),
        )
        .route(
            "/api/gyms/{id}",
            get(get_gym).put(update_gym).delete(delete_gym),
        )
        .route("/api/trainers", get(get_trainers).post(add_trainer))
        .route(
            "/api/trainers/{id}",
            put(update_trainer).delete(remove_trainer),
        )
        .route("/api/members", get(get_members).post(add_member))
        .route(
            "/api/members/{id}",
            put(update_member).delete(remove_member),
        )
        .route(
            "/api/memberships",
            get(get_memberships).post(create_membership),
        )
        .route("/api/memberships/renewals", get(get_renewal_requests))
        .route(
            "/api/memberships/renewals/respond",
            post(respond_renewal_request),
        )
        .route(
            "/api/memberships/{id}",
            put(update_membership).delete(delete_membership),
        )
        .route("/api/plans", get(get_plans).post(create_plan))
        .route("/api/plans/requests", get(get_plan_requests))
        .route(
            "/api/plans/requests/{id}/fulfill",
            post(fulfill_plan_request),
        )
        .route("/api/plans/{id}", put(update_plan).delete(delete_plan))
        .route("/api/gym-members", get(get_gym_directory))
        .route("/api/gym-members/join", post(join_gym))
        .route("/api/gym-members/requests", get(get_join_requests))
        .route("/api/gym-members/respond", post(respond_join_request))
        .route("/api/member/gym-profile", get(get_gym_profile))
        .route("/api/member/trainer-gym", get(get_trainer_gym))
        .route("/api/member/request-plan", post(request_plan))
        .route("/api/member/plans", get(get_my_plans))
        .route("/api/member/membership", get(get_my_membership))
        .route("/api/member/renewal-request", post(request_renewal))
        .route("/api/messages", post(send_message))
        .route("/api/messages/member", get(get_member_messages))
        .route("/api/messages/trainer", get(get_trainer_messages))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
