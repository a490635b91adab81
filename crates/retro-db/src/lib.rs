//! # retro-db
//!
//! Database layer implementing the relational repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and runtime migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the team prompt response reactable store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use retro_db::{create_pool, run_migrations, DatabaseConfig, PgResponseStore};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let responses = PgResponseStore::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgMeetingMemberRepository, PgMeetingRepository, PgPromptRepository, PgResponseStore,
    PgUserRepository,
};
