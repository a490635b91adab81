//! Viewer authentication

mod jwt;

pub use jwt::{Claims, JwtService};
