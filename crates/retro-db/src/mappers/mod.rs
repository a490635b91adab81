//! Model to entity mappers
//!
//! Conversions from database rows (models) to domain objects (retro-core).
//! Rows whose text columns encode enums use `TryFrom`.

mod meeting;
mod member;
mod prompt;
mod response;
mod user;
