//! Verified access tokens, so each server call does not round-trip to GoTrue

use dashmap::DashMap;
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};
use std::time::{Duration, Instant};

use super::{SupabaseClient, SupabaseResult};
use crate::domain::models::AuthUser;
use crate::shared::logging::{log_token_cache, log_token_eviction};

pub const TOKEN_TTL: Duration = Duration::from_secs(60);
/// Map size past which inserts sweep expired entries
const EVICT_THRESHOLD: usize = 512;

struct CachedUser {
    user: AuthUser,
    cached_at: Instant,
}

/// Keyed by the SHA-256 of the token, never the token itself
static VERIFIED_TOKENS: Lazy<DashMap<String, CachedUser>> = Lazy::new(DashMap::new);

pub fn token_key(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn get_cached(token: &str) -> Option<AuthUser> {
    let key = token_key(token);
    if let Some(entry) = VERIFIED_TOKENS.get(&key) {
        if entry.cached_at.elapsed() < TOKEN_TTL {
            return Some(entry.user.clone());
        }
        drop(entry);
        VERIFIED_TOKENS.remove(&key);
    }
    None
}

/// Drop every expired entry, returning how many were removed
pub fn evict_stale() -> usize {
    let before = VERIFIED_TOKENS.len();
    VERIFIED_TOKENS.retain(|_, v| v.cached_at.elapsed() < TOKEN_TTL);
    before.saturating_sub(VERIFIED_TOKENS.len())
}

pub fn set_cached(token: &str, user: AuthUser) {
    if VERIFIED_TOKENS.len() >= EVICT_THRESHOLD {
        let evicted = evict_stale();
        if evicted > 0 {
            log_token_eviction(evicted);
        }
    }
    VERIFIED_TOKENS.insert(
        token_key(token),
        CachedUser {
            user,
            cached_at: Instant::now(),
        },
    );
}

pub fn invalidate(token: &str) {
    VERIFIED_TOKENS.remove(&token_key(token));
}

/// Resolve the user behind `token`, from cache or GoTrue
pub async fn verify_token(client: &SupabaseClient, token: &str) -> SupabaseResult<AuthUser> {
    if let Some(user) = get_cached(token) {
        log_token_cache(true);
        return Ok(user);
    }
    log_token_cache(false);
    let user = client.get_user(token).await?;
    set_cached(token, user.clone());
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(id: &str) -> AuthUser {
        AuthUser {
            id: id.to_string(),
            email: None,
            phone: None,
            is_anonymous: true,
            user_metadata: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_token_key_is_hex_sha256() {
        let key = token_key("abc");
        assert_eq!(key.len(), 64);
        assert_eq!(
            key,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_cache_roundtrip_and_invalidate() {
        set_cached("token-cache-test", make_user("u-cache"));
        assert_eq!(get_cached("token-cache-test").unwrap().id, "u-cache");
        invalidate("token-cache-test");
        assert!(get_cached("token-cache-test").is_none());
    }

    #[test]
    fn test_insert_past_threshold_sweeps_expired_entries() {
        let Some(expired_at) = Instant::now().checked_sub(TOKEN_TTL * 2) else {
            return;
        };
        let stale: Vec<String> = (0..EVICT_THRESHOLD + 10)
            .map(|i| token_key(&format!("stale-token-{i}")))
            .collect();
        for key in &stale {
            VERIFIED_TOKENS.insert(
                key.clone(),
                CachedUser {
                    user: make_user("u-stale"),
                    cached_at: expired_at,
                },
            );
        }

        set_cached("fresh-token-after-sweep", make_user("u-fresh"));

        assert!(stale.iter().all(|key| !VERIFIED_TOKENS.contains_key(key)));
        assert_eq!(get_cached("fresh-token-after-sweep").unwrap().id, "u-fresh");
        invalidate("fresh-token-after-sweep");
    }

    #[test]
    fn test_unknown_token_misses() {
        assert!(get_cached("never-seen").is_none());
    }
}
