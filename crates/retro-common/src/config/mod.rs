//! Configuration structs

mod app_config;

pub use app_config::{
    AnalyticsConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig,
    Environment, JwtConfig, RateLimitConfig, ReactjiConfig, RedisConfig, ServerConfig,
};
