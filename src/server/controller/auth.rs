use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResponseDto, LoginDto, SignupDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::SignupParams,
        service::auth::{AuthService, AuthSession},
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn session_response(message: &str, session: AuthSession) -> AuthResponseDto {
    AuthResponseDto {
        message: message.to_string(),
        token: session.token,
        user: session.user.into_dto(),
    }
}

/// Register a new account.
///
/// Creates the account with the chosen role and returns a bearer token for
/// it, so the client is logged in right away.
///
/// # Arguments
/// - `state` - Application state containing the database and token service
/// - `payload` - Email, password, role and display name
///
/// # Returns
/// - `201 Created` - Account created, token issued
/// - `400 Bad Request` - Blank field, unknown role or email already taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid signup data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, &state.tokens)
        .signup(SignupParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(session_response("User registered successfully", session)),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Credentials accepted, token issued
/// - `400 Bad Request` - Missing fields or invalid credentials
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(session_response("Login successful", session)),
    ))
}

/// Get the account the bearer token belongs to.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current account", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
