use std::collections::HashMap;
use std::hash::Hash;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::credentials::fetch_auth_token_with_expiry;
use crate::personio::config::ClientConfig;

const REFRESH_SKEW_SECS: u64 = 300;

#[derive(Clone, Debug)]
pub struct CachedToken {
    pub access_token: String,
    pub expires_at: Option<u64>,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

pub fn is_expiring_soon(expires_at: Option<u64>) -> bool {
    let Some(exp) = expires_at else {
        return true;
    };
    now_secs() + REFRESH_SKEW_SECS >= exp
}

pub async fn fetch_token(config: &ClientConfig) -> Result<CachedToken, String> {
    let token = fetch_auth_token_with_expiry(
        &config.api_base_url,
        &config.client_id,
        &config.client_secret,
    )
    .await?;

    Ok(CachedToken {
        access_token: token.access_token,
        expires_at: Some(token.expires_at),
    })
}

pub async fn get_access_token<K: Eq + Hash + Clone>(
    config: &ClientConfig,
    cache: &mut HashMap<K, CachedToken>,
    key: &K,
) -> Result<String, String> {
    if let Some(cached) = cache.get(key) {
        if !cached.access_token.trim().is_empty() && !is_expiring_soon(cached.expires_at) {
            return Ok(cached.access_token.clone());
        }
    }

    let refreshed = fetch_token(config).await?;
    let access_token = refreshed.access_token.clone();
    cache.insert(key.clone(), refreshed);
    Ok(access_token)
}
