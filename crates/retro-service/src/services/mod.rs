//! Business logic services
//!
//! Services borrow a `ServiceContext` for their dependencies and a
//! per-request `DataLoader` for cached loads and the operation id.

pub mod context;
pub mod error;
pub mod loader;
pub mod phase;
pub mod reactji;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use loader::DataLoader;
pub use phase::PhaseService;
pub use reactji::ReactjiService;
