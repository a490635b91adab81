//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs, including the reactji mutation payload
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::AddReactjiRequest;

pub use responses::{
    ApiResponse, EstimateStageResponse, EstimateUserScoreResponse, HealthChecks, HealthResponse,
    HoveringUserResponse, MutationPayload, ReactjiError, ReadinessResponse, ReflectPromptResponse,
    RevealVotesResponse, DEFAULT_TASK_SERVICE,
};
