//! Axum extractors for request handling
//!
//! Custom extractors for viewer authentication, the mutator connection id,
//! path parameters, and validated bodies.

mod auth;
mod mutator;
mod path;
mod validated;

pub use auth::AuthUser;
pub use mutator::{MutatorId, MUTATOR_ID_HEADER};
pub use path::{ApiPath, MeetingPath, ReactablePath, StagePath};
pub use validated::ValidatedJson;
