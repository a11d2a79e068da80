//! Redis-backed `KeyValueStore` for production.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::info;

use crate::errors::AppError;
use crate::storage::KeyValueStore;

pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    pub fn new(client: redis::Client) -> Self {
        info!("Redis session store initialized");
        Self { client }
    }

    async fn conn(&self) -> Result<redis::aio::MultiplexedConnection, AppError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Storage(format!("redis connect: {e}")))
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut conn = self.conn().await?;
        conn.get(key)
            .await
            .map_err(|e| AppError::Storage(format!("redis get: {e}")))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        let mut conn = self.conn().await?;
        conn.set(key, value)
            .await
            .map_err(|e| AppError::Storage(format!("redis set: {e}")))
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let mut conn = self.conn().await?;
        conn.del(key)
            .await
            .map_err(|e| AppError::Storage(format!("redis del: {e}")))
    }
}
