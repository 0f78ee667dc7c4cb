use deadpool_redis::redis::RedisError;
use deadpool_redis::{Config, Connection, Pool, PoolError, Runtime};
use error_stack::{Report, ResultExt};

use kernel::interface::counter::VisitCounter;
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

const REDIS_URL: &str = "REDIS_URL";

pub struct RedisDatabase {
    pool: Pool,
}

impl RedisDatabase {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(REDIS_URL)?;
        let cfg = Config::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .change_context_lazy(|| KernelError::Internal)?;
        Ok(Self { pool })
    }

    async fn connection(&self) -> error_stack::Result<Connection, KernelError> {
        self.pool.get().await.convert_error()
    }

    fn visit_key(key: &str) -> String {
        format!("visits:{key}")
    }
}

impl Clone for RedisDatabase {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}

#[async_trait::async_trait]
impl VisitCounter for RedisDatabase {
    async fn get(&self, key: &str) -> error_stack::Result<i64, KernelError> {
        let mut con = self.connection().await?;
        let count: Option<i64> = redis::cmd("GET")
            .arg(Self::visit_key(key))
            .query_async(&mut con)
            .await
            .convert_error()?;
        Ok(count.unwrap_or(0))
    }

    async fn set(&self, key: &str, value: i64) -> error_stack::Result<(), KernelError> {
        let mut con = self.connection().await?;
        redis::cmd("SET")
            .arg(Self::visit_key(key))
            .arg(value)
            .query_async::<_, ()>(&mut con)
            .await
            .convert_error()?;
        Ok(())
    }
}

impl<T> ConvertError for Result<T, PoolError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            PoolError::Timeout(_) => Report::new(error).change_context(KernelError::Timeout),
            _ => Report::new(error).change_context(KernelError::Internal),
        })
    }
}

impl<T> ConvertError for Result<T, RedisError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::new(error).change_context(KernelError::Internal))
    }
}
