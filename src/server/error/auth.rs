use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, user::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization: Bearer` header.
    #[error("No bearer token in request")]
    MissingToken,

    /// The token failed signature or expiry validation.
    #[error("Token rejected: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// The token is valid but names an account that no longer exists.
    #[error("Account {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// The account's role is not on the route's allow-list.
    #[error("Account {user_id} with role {role} denied: {reason}")]
    AccessDenied {
        user_id: i32,
        role: Role,
        reason: String,
    },

    /// Unknown email or wrong password at login.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` → 401 `No token provided, authorization denied`
/// - `InvalidToken` / `UserNotInDatabase` → 401 `Invalid token, authorization denied`
/// - `AccessDenied` → 403 `Access denied: insufficient permissions`
/// - `InvalidCredentials` → 400 `Invalid credentials`
///
/// Details stay in the debug log; clients only see the fixed messages.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "No token provided, authorization denied",
            ),
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                "Invalid token, authorization denied",
            ),
            Self::AccessDenied { .. } => (
                StatusCode::FORBIDDEN,
                "Access denied: insufficient permissions",
            ),
            Self::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid credentials"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
