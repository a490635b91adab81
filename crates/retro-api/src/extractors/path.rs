//! Path parameter extractors
//!
//! Path rejections, including unknown reactable kinds, become 400 responses
//! with the API error body.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use retro_core::ReactableKind;
use serde::{de::DeserializeOwned, Deserialize};

use crate::response::ApiError;

/// Path extractor with API error rejections
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(ApiPath(inner))
    }
}

/// Path parameters with meeting_id
#[derive(Debug, Deserialize)]
pub struct MeetingPath {
    pub meeting_id: String,
}

/// Path parameters addressing a stage of a meeting
#[derive(Debug, Deserialize)]
pub struct StagePath {
    pub meeting_id: String,
    pub stage_id: String,
}

/// Path parameters addressing a reactable within a meeting
#[derive(Debug, Deserialize)]
pub struct ReactablePath {
    pub meeting_id: String,
    pub reactable_type: ReactableKind,
    pub reactable_id: String,
}
