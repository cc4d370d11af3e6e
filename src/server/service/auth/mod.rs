//! Account signup and login.
//!
//! Both paths end by issuing a bearer token through `TokenService`.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{normalize_email, CreateUserParams, SignupParams, User},
        service::auth::{
            password::{hash_password, verify_password},
            token::TokenService,
        },
    },
};

/// A freshly authenticated account and its token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account and logs it in.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Created account with token
    /// - `Err(AppError::BadRequest)` - Blank field, unknown role or taken email
    pub async fn signup(&self, params: SignupParams) -> Result<AuthSession, AppError> {
        if params.email.is_empty()
            || params.password.is_empty()
            || params.role.is_empty()
            || params.name.is_empty()
        {
            return Err(AppError::bad_request("Email, password, role, and name are required"));
        }

        let role: Role = params
            .role
            .parse()
            .map_err(|_| AppError::bad_request("Invalid role"))?;

        let repo = UserRepository::new(self.db);
        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::bad_request("User already exists"));
        }

        let user = repo
            .create(CreateUserParams {
                email: params.email,
                password_hash: hash_password(&params.password)?,
                role,
                name: params.name,
            })
            .await
            .map_err(AppError::duplicate("User already exists"))?;

        tracing::info!("Registered account {} with role {}", user.id, user.role);

        Ok(AuthSession {
            token: self.tokens.issue(&user)?,
            user,
        })
    }

    /// Checks credentials and issues a token.
    ///
    /// Unknown emails and wrong passwords fail the same way.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::bad_request("Email and password are required"));
        }

        let credentials = UserRepository::new(self.db)
            .find_credentials_by_email(&normalize_email(email))
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(AuthSession {
            token: self.tokens.issue(&credentials.user)?,
            user: credentials.user,
        })
    }
}
