//! Redis connection pool using deadpool-redis.
//!
//! Provides a managed pool of Redis connections plus the handful of typed
//! commands the stores need.

use deadpool_redis::{Config, Pool, Runtime};
use redis::AsyncCommands;
use retro_core::DomainError;

/// Redis pool configuration
#[derive(Debug, Clone)]
pub struct RedisPoolConfig {
    /// Redis connection URL (e.g., `redis://localhost:6379`)
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: usize,
}

impl Default for RedisPoolConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            max_connections: 16,
        }
    }
}

impl From<&retro_common::RedisConfig> for RedisPoolConfig {
    fn from(config: &retro_common::RedisConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections as usize,
        }
    }
}

/// Error type for Redis pool operations
#[derive(Debug, thiserror::Error)]
pub enum RedisPoolError {
    #[error("Failed to create Redis pool: {0}")]
    CreatePool(String),

    #[error("Failed to get connection from pool: {0}")]
    GetConnection(#[from] deadpool_redis::PoolError),

    #[error("Redis command error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for Redis pool operations
pub type RedisResult<T> = Result<T, RedisPoolError>;

/// Convert a Redis pool error to DomainError
pub fn map_cache_error(e: RedisPoolError) -> DomainError {
    match e {
        RedisPoolError::Serialization(e) => DomainError::SerializationError(e.to_string()),
        other => DomainError::CacheError(other.to_string()),
    }
}

/// Managed Redis connection pool
#[derive(Clone)]
pub struct RedisPool {
    pool: Pool,
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisPool")
            .field("status", &self.pool.status())
            .finish()
    }
}

impl RedisPool {
    /// Create a new Redis pool with the given configuration
    pub fn new(config: RedisPoolConfig) -> RedisResult<Self> {
        let cfg = Config::from_url(&config.url);
        let pool = cfg
            .builder()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?;

        // Redact credentials from URL for logging
        let safe_url = config.url.split('@').next_back().unwrap_or(&config.url);
        tracing::info!(
            url = %safe_url,
            max_connections = config.max_connections,
            "Redis pool created"
        );

        Ok(Self { pool })
    }

    /// Create a new Redis pool from retro-common config
    pub fn from_config(config: &retro_common::RedisConfig) -> RedisResult<Self> {
        Self::new(RedisPoolConfig::from(config))
    }

    /// Get a connection from the pool
    pub async fn get(&self) -> RedisResult<deadpool_redis::Connection> {
        self.pool.get().await.map_err(RedisPoolError::GetConnection)
    }

    /// Check if the pool is healthy by pinging Redis
    pub async fn health_check(&self) -> RedisResult<()> {
        let mut conn = self.get().await?;
        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        Ok(())
    }

    /// Store a JSON-serialized value
    pub async fn set<V: serde::Serialize>(&self, key: &str, value: &V) -> RedisResult<()> {
        let mut conn = self.get().await?;
        let serialized = serde_json::to_string(value)?;
        conn.set::<_, _, ()>(key, &serialized).await?;
        Ok(())
    }

    /// Get a JSON-serialized value by key
    pub async fn get_value<V: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> RedisResult<Option<V>> {
        let mut conn = self.get().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(v) => Ok(Some(serde_json::from_str(&v)?)),
            None => Ok(None),
        }
    }

    /// Delete a key
    pub async fn delete(&self, key: &str) -> RedisResult<bool> {
        let mut conn = self.get().await?;
        let deleted: i32 = conn.del(key).await?;
        Ok(deleted > 0)
    }

    /// All members of a set
    pub async fn set_members(&self, key: &str) -> RedisResult<Vec<String>> {
        let mut conn = self.get().await?;
        let members: Vec<String> = conn.smembers(key).await?;
        Ok(members)
    }

    /// Add a member to a set
    pub async fn set_add(&self, key: &str, member: &str) -> RedisResult<()> {
        let mut conn = self.get().await?;
        conn.sadd::<_, _, ()>(key, member).await?;
        Ok(())
    }

    /// Remove a member from a set
    pub async fn set_remove(&self, key: &str, member: &str) -> RedisResult<()> {
        let mut conn = self.get().await?;
        conn.srem::<_, _, ()>(key, member).await?;
        Ok(())
    }

    /// Push a JSON-serialized value onto the head of a list, returning the new length
    pub async fn push<V: serde::Serialize>(&self, key: &str, value: &V) -> RedisResult<usize> {
        let mut conn = self.get().await?;
        let serialized = serde_json::to_string(value)?;
        let len: usize = conn.lpush(key, &serialized).await?;
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RedisPoolConfig::default();
        assert_eq!(config.url, "redis://127.0.0.1:6379");
        assert_eq!(config.max_connections, 16);
    }

    #[test]
    fn test_config_from_redis_config() {
        let redis_config = retro_common::RedisConfig {
            url: "redis://localhost:6380".to_string(),
            max_connections: 32,
        };
        let pool_config = RedisPoolConfig::from(&redis_config);
        assert_eq!(pool_config.url, "redis://localhost:6380");
        assert_eq!(pool_config.max_connections, 32);
    }

    #[test]
    fn test_map_cache_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let domain = map_cache_error(RedisPoolError::Serialization(err));
        assert_eq!(domain.code(), "SERIALIZATION_ERROR");

        let domain = map_cache_error(RedisPoolError::CreatePool("bad url".to_string()));
        assert_eq!(domain.code(), "CACHE_ERROR");
    }
}
