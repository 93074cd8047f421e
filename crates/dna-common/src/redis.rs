/// Redis wrapper with graceful degradation.
///
/// Every operation returns `Option<T>` or `bool`. On any Redis error the operation logs a
/// warning and reports failure; callers carry on without the stored value. The quiz flow is
/// fully functional without Redis.
use std::collections::HashMap;

use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::warn;

#[derive(Clone)]
pub struct RedisCache {
    client: Option<redis::Client>,
}

impl RedisCache {
    /// Attempt to create a client. If the URL is `None` or invalid, returns a `RedisCache`
    /// whose operations are all no-ops.
    pub fn new(url: Option<&str>) -> Self {
        let client = url.and_then(|u| {
            redis::Client::open(u)
                .inspect_err(|e| warn!(error = %e, url = u, "failed to create redis client, storage disabled"))
                .ok()
        });
        Self { client }
    }

    /// Returns `true` when no client could be created at all.
    pub fn is_disabled(&self) -> bool {
        self.client.is_none()
    }

    /// Test the connection by sending a PING. Returns `true` if Redis is reachable.
    pub async fn is_available(&self) -> bool {
        let Some(mut conn) = self.connection().await else {
            return false;
        };
        let result: Result<String, _> = redis::cmd("PING").query_async(&mut conn).await;
        result.is_ok()
    }

    /// Get a value. Returns `None` if Redis is unavailable or the key doesn't exist.
    pub async fn get(&self, key: &str) -> Option<String> {
        let mut conn = self.connection().await?;
        conn.get::<_, Option<String>>(key)
            .await
            .inspect_err(|e| warn!(error = %e, key, "redis GET failed"))
            .ok()
            .flatten()
    }

    /// Set a value with no expiry. Returns `true` if successful.
    pub async fn set(&self, key: &str, value: &str) -> bool {
        let Some(mut conn) = self.connection().await else {
            return false;
        };
        conn.set::<_, _, ()>(key, value)
            .await
            .inspect_err(|e| warn!(error = %e, key, "redis SET failed"))
            .is_ok()
    }

    /// Set a value with a TTL in seconds. Returns `true` if successful.
    pub async fn set_with_ttl(&self, key: &str, value: &str, ttl_secs: u64) -> bool {
        let Some(mut conn) = self.connection().await else {
            return false;
        };
        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .inspect_err(|e| warn!(error = %e, key, "redis SETEX failed"))
            .is_ok()
    }

    /// Increment a hash field by `delta`, creating it at zero first if needed.
    pub async fn hincr_by(&self, key: &str, field: &str, delta: i64) -> Option<i64> {
        let mut conn = self.connection().await?;
        conn.hincr::<_, _, _, i64>(key, field, delta)
            .await
            .inspect_err(|e| warn!(error = %e, key, field, "redis HINCRBY failed"))
            .ok()
    }

    /// Read every field of a hash. An absent key yields an empty map.
    pub async fn hgetall(&self, key: &str) -> Option<HashMap<String, String>> {
        let mut conn = self.connection().await?;
        conn.hgetall::<_, HashMap<String, String>>(key)
            .await
            .inspect_err(|e| warn!(error = %e, key, "redis HGETALL failed"))
            .ok()
    }

    async fn connection(&self) -> Option<MultiplexedConnection> {
        let client = self.client.as_ref()?;
        client
            .get_multiplexed_async_connection()
            .await
            .inspect_err(|e| warn!(error = %e, "redis connection failed"))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::RedisCache;

    #[tokio::test]
    async fn missing_url_degrades_to_noops() {
        let cache = RedisCache::new(None);
        assert!(cache.is_disabled());
        assert!(!cache.is_available().await);
        assert_eq!(cache.get("tdna:test").await, None);
        assert!(!cache.set("tdna:test", "value").await);
        assert!(!cache.set_with_ttl("tdna:test", "value", 60).await);
        assert_eq!(cache.hincr_by("tdna:test:hash", "field", 1).await, None);
        assert_eq!(cache.hgetall("tdna:test:hash").await, None);
    }

    #[test]
    fn malformed_url_disables_client() {
        let cache = RedisCache::new(Some("not a redis url"));
        assert!(cache.is_disabled());
    }
}
