//! Visitor result slots backed by Redis.
//!
//! Key schema:
//! - `tdna:v1:result:{visitor_id}`: JSON StoredResult (optional TTL)
//!
//! A new submission overwrites the slot. There is no versioning or migration: a value that no
//! longer deserializes is treated as absent.

use tracing::warn;

use crate::model::StoredResult;
use dna_common::redis::RedisCache;

const KEY_PREFIX: &str = "tdna:v1:";

pub struct ResultStore {
    redis: RedisCache,
    ttl_secs: Option<u64>,
}

impl ResultStore {
    pub fn new(redis: RedisCache, ttl_secs: Option<u64>) -> Self {
        Self { redis, ttl_secs }
    }

    /// Returns `true` if the result was written.
    pub async fn save(&self, visitor_id: &str, result: &StoredResult) -> bool {
        let key = result_key(visitor_id);
        let json = match serde_json::to_string(result) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, key, "result serialization failed");
                return false;
            }
        };
        match self.ttl_secs {
            Some(ttl) => self.redis.set_with_ttl(&key, &json, ttl).await,
            None => self.redis.set(&key, &json).await,
        }
    }

    pub async fn load(&self, visitor_id: &str) -> Option<StoredResult> {
        let key = result_key(visitor_id);
        let json = self.redis.get(&key).await?;
        serde_json::from_str(&json)
            .inspect_err(|e| warn!(error = %e, key, "stored result deserialization failed"))
            .ok()
    }
}

fn result_key(visitor_id: &str) -> String {
    format!("{KEY_PREFIX}result:{}", visitor_id.trim())
}
