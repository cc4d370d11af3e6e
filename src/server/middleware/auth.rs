use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::User,
        service::auth::token::TokenService,
    },
};

const BEARER_PREFIX: &str = "Bearer ";

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Authenticates the request and checks the account role.
    ///
    /// An empty `roles` list admits any authenticated account.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated account
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Bad signature or expired token
    /// - `Err(AuthError::UserNotInDatabase)` - Token names a missing account
    /// - `Err(AuthError::AccessDenied)` - Role not in `roles`
    pub async fn require(&self, roles: &[Role]) -> Result<User, AppError> {
        let token = self.bearer_token().ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.verify(token)?;
        let user_id = claims.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !roles.is_empty() && !roles.contains(&user.role) {
            return Err(AuthError::AccessDenied {
                user_id: user.id,
                role: user.role,
                reason: format!("route requires one of {:?}", roles),
            }
            .into());
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
