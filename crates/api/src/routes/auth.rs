//! Login route handler.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use catalog_mock_core::Token;

use crate::error::Result;
use crate::extract::JsonOrForm;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Login request body (JSON or urlencoded form).
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Exchange a username and password for an access token.
///
/// Responds with `{ "username": ..., "token": ... }`.
///
/// # Errors
///
/// Returns 400 if the body is unparsable or a field is missing or empty,
/// and 401 if no user has this exact username and password.
///
/// # Route
///
/// `POST /v1/login`
#[instrument(skip(state, form), fields(username = form.username.as_deref()))]
pub async fn login(
    State(state): State<AppState>,
    JsonOrForm(form): JsonOrForm<LoginForm>,
) -> Result<Json<Token>> {
    let (Some(username), Some(password)) = (form.username, form.password) else {
        return Err(AuthError::MissingCredentials.into());
    };

    let auth = AuthService::new(state.catalog());
    match auth.login_with_password(&username, &password).await {
        Ok(token) => {
            tracing::info!("Login succeeded");
            Ok(Json(token))
        }
        Err(e) => {
            tracing::debug!(error = %e, "Login failed");
            Err(e.into())
        }
    }
}
