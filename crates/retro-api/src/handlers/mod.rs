//! Route handlers
//!
//! HTTP request handlers organized by domain.

pub mod health;
pub mod phases;
pub mod reactji;
