use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Hashing a password or parsing a stored hash failed.
    ///
    /// Results in a 500 Internal Server Error.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing a freshly issued token failed.
    #[error("Failed to issue token: {0}")]
    TokenEncode(#[source] jsonwebtoken::errors::Error),

    /// The configured token lifetime does not fit the current time.
    #[error("Token expiry is out of range")]
    TokenExpiry,

    /// A row that was just written could not be read back.
    #[error("{entity} {id} missing after write")]
    MissingAfterWrite { entity: &'static str, id: i32 },
}
