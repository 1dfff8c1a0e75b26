//! Authentication service.
//!
//! Checks plaintext credentials against the user store and issues opaque
//! access tokens. Issued tokens are recorded but never validated; nothing in
//! the API requires one yet.

mod error;

pub use error::AuthError;

use rand::Rng;
use rand::distr::Alphanumeric;

use catalog_mock_core::{NewToken, Token};

use crate::catalog::Catalog;

/// Length of an issued access token.
pub const TOKEN_LENGTH: usize = 16;

/// Authentication service.
///
/// Handles login and token issuance against the shared catalog.
pub struct AuthService<'a> {
    catalog: &'a Catalog,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Login with username and password, issuing a fresh token on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if either value is empty.
    /// Returns `AuthError::InvalidCredentials` if no user has this exact pair.
    pub async fn login_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Token, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let known = self
            .catalog
            .users()
            .read()
            .await
            .all()
            .iter()
            .any(|user| user.login.matches(username, password));
        if !known {
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self
            .catalog
            .tokens()
            .write()
            .await
            .add_one(NewToken {
                username: username.to_string(),
                token: generate_token(TOKEN_LENGTH),
            })
            .clone();

        Ok(issued)
    }
}

/// Generate a random alphanumeric token from the thread-local CSPRNG.
fn generate_token(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use catalog_mock_core::NewUser;
    use serde_json::json;

    use super::*;
    use crate::fixtures::Fixtures;

    fn catalog() -> Catalog {
        let user: NewUser = serde_json::from_value(json!({
            "login": { "username": "greenlion235", "password": "waters" }
        }))
        .unwrap();
        Catalog::new(Fixtures {
            users: vec![user],
            ..Fixtures::default()
        })
    }

    #[test]
    fn test_generate_token_shape() {
        let token = generate_token(TOKEN_LENGTH);
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_token_is_random() {
        assert_ne!(generate_token(TOKEN_LENGTH), generate_token(TOKEN_LENGTH));
    }

    #[tokio::test]
    async fn test_login_success_issues_and_stores_token() {
        let catalog = catalog();
        let auth = AuthService::new(&catalog);

        let token = auth
            .login_with_password("greenlion235", "waters")
            .await
            .unwrap();

        assert_eq!(token.attrs.username, "greenlion235");
        assert_eq!(token.attrs.token.len(), TOKEN_LENGTH);

        let tokens = catalog.tokens().read().await;
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.get(token.id).unwrap(), &token);
    }

    #[tokio::test]
    async fn test_tokens_accumulate() {
        let catalog = catalog();
        let auth = AuthService::new(&catalog);

        let first = auth.login_with_password("greenlion235", "waters").await.unwrap();
        let second = auth.login_with_password("greenlion235", "waters").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_ne!(first.attrs.token, second.attrs.token);
        assert_eq!(catalog.tokens().read().await.len(), 2);
    }

    #[tokio::test]
    async fn test_login_missing_credentials() {
        let catalog = catalog();
        let auth = AuthService::new(&catalog);

        let err = auth.login_with_password("bob", "").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));

        let err = auth.login_with_password("", "waters").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let catalog = catalog();
        let auth = AuthService::new(&catalog);

        let err = auth
            .login_with_password("greenlion235", "wrongPassword")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(catalog.tokens().read().await.is_empty());
    }
}
