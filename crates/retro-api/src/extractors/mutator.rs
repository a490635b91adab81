//! Mutator id extractor
//!
//! The originating client connection of a mutation. Subscribers use it to
//! ignore echoes of their own changes.

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Header carrying the originating connection id
pub const MUTATOR_ID_HEADER: &str = "x-mutator-id";

/// Connection id of the caller, if it sent one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutatorId(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for MutatorId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mutator_id = parts
            .headers
            .get(MUTATOR_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(ToString::to_string);

        Ok(MutatorId(mutator_id))
    }
}
