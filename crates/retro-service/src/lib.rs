//! # retro-service
//!
//! Application layer containing the reactji mutation, the meeting phase
//! resolvers, and their DTOs.

pub mod dto;
pub mod services;

pub use services::{
    DataLoader, PhaseService, ReactjiService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
