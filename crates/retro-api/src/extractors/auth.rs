//! Authentication extractor
//!
//! Extracts and validates the viewer's bearer token from the Authorization
//! header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use retro_common::JwtService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated viewer extracted from a JWT
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub viewer_id: String,
}

impl AuthUser {
    pub fn new(viewer_id: impl Into<String>) -> Self {
        Self {
            viewer_id: viewer_id.into(),
        }
    }

    /// Decode a bearer token into the viewer it names
    pub fn from_token(jwt_service: &JwtService, token: &str) -> Result<Self, ApiError> {
        let claims = jwt_service.decode_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Invalid access token");
            ApiError::from(e)
        })?;

        let viewer_id = claims.viewer_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid viewer id in token");
            ApiError::from(e)
        })?;

        Ok(Self::new(viewer_id))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        Self::from_token(app_state.jwt_service(), bearer.token())
    }
}
