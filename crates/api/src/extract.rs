//! Request extractors.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Extracts a body sent either as JSON or as an urlencoded form.
///
/// The `Content-Type` header picks the parser: `application/x-www-form-urlencoded`
/// goes through [`Form`], anything else through [`Json`]. Any rejection
/// becomes [`AppError::BadRequest`].
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(JsonOrForm(body): JsonOrForm<LoginForm>) -> impl IntoResponse {
///     // ...
/// }
/// ```
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(body) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(Self(body))
        } else {
            let Json(body) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(Self(body))
        }
    }
}
