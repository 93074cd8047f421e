use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};

use crate::mcp_api::{CategoryCompletionStats, CompletionStats};
use crate::redis::RedisCache;

static SESSION_COUNTER: AtomicU64 = AtomicU64::new(0);

const COMPLETIONS_KEY: &str = "tdna:v1:completions";
const TOTAL_FIELD: &str = "total";

/// Opaque identifier attached to one finished quiz run.
pub type SessionId = String;

/// Generate a fresh 32-hex-character session id.
pub fn new_session_id() -> SessionId {
    let now = unix_now();
    let counter = SESSION_COUNTER.fetch_add(1, Ordering::Relaxed);
    let pid = std::process::id();

    let mut h = Sha256::new();
    h.update(now.as_nanos().to_le_bytes());
    h.update(pid.to_le_bytes());
    h.update(counter.to_le_bytes());
    let digest = h.finalize();
    hex_lower(&digest[..16])
}

/// Seconds since the unix epoch, clamped to zero on a clock before 1970.
pub fn unix_timestamp() -> u64 {
    unix_now().as_secs()
}

fn unix_now() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
}

fn hex_lower(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0f) as usize] as char);
    }
    out
}

/// Redis-backed counters of finished quiz runs, bucketed by ranking category.
///
/// Hash `tdna:v1:completions` holds `total`, `leading:{category}` and `top3:{category}`.
#[derive(Clone)]
pub struct CompletionCounter {
    redis: RedisCache,
}

impl CompletionCounter {
    pub fn new(redis: RedisCache) -> Self {
        Self { redis }
    }

    /// Count one completion. `top_categories` is the ranked list, best first.
    pub async fn record(&self, top_categories: &[&str]) {
        let _ = self.redis.hincr_by(COMPLETIONS_KEY, TOTAL_FIELD, 1).await;

        if let Some(leading) = top_categories.first() {
            let _ = self
                .redis
                .hincr_by(COMPLETIONS_KEY, &format!("leading:{leading}"), 1)
                .await;
        }
        for category in top_categories {
            let _ = self
                .redis
                .hincr_by(COMPLETIONS_KEY, &format!("top3:{category}"), 1)
                .await;
        }
    }

    pub async fn get_stats(&self) -> CompletionStats {
        let redis_available = self.redis.is_available().await;
        let Some(entries) = self.redis.hgetall(COMPLETIONS_KEY).await else {
            return CompletionStats {
                total_completions: 0,
                categories: vec![],
                redis_available,
            };
        };
        aggregate(entries, redis_available)
    }
}

fn aggregate(entries: HashMap<String, String>, redis_available: bool) -> CompletionStats {
    let mut total_completions = 0;
    let mut by_category: HashMap<String, CategoryCompletionStats> = HashMap::new();

    for (field, value) in entries {
        let parsed = value.parse::<u64>().unwrap_or(0);
        if field == TOTAL_FIELD {
            total_completions = parsed;
            continue;
        }
        let Some((kind, category)) = field.split_once(':') else {
            continue;
        };
        let stat = by_category
            .entry(category.to_string())
            .or_insert(CategoryCompletionStats {
                category: category.to_string(),
                leading: 0,
                in_top3: 0,
            });
        match kind {
            "leading" => stat.leading = parsed,
            "top3" => stat.in_top3 = parsed,
            _ => {}
        }
    }

    let mut categories: Vec<CategoryCompletionStats> = by_category.into_values().collect();
    categories.sort_by(|a, b| {
        b.leading
            .cmp(&a.leading)
            .then_with(|| b.in_top3.cmp(&a.in_top3))
            .then_with(|| a.category.cmp(&b.category))
    });

    CompletionStats {
        total_completions,
        categories,
        redis_available,
    }
}
