//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password missing or empty.
    #[error("missing username or password")]
    MissingCredentials,

    /// No user with this username/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,
}
