//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the token decoder, the pools probed by readiness checks, and configuration.

use std::sync::Arc;

use retro_cache::RedisPool;
use retro_common::{AppConfig, JwtService};
use retro_db::PgPool;
use retro_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    jwt_service: Arc<JwtService>,
    pool: PgPool,
    redis_pool: RedisPool,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        pool: PgPool,
        redis_pool: RedisPool,
        config: AppConfig,
    ) -> Self {
        let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);
        Self {
            service_context: Arc::new(service_context),
            jwt_service: Arc::new(jwt_service),
            pool,
            redis_pool,
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("config", &"AppConfig")
            .finish_non_exhaustive()
    }
}
