use std::{
    collections::HashMap,
    time::{SystemTime, UNIX_EPOCH},
};

use reqwest::Client;
use serde_json::Value;

// Personio v1 auth tokens are valid for one day; the API does not report
// an expiry in the response body.
const TOKEN_TTL_SECS: u64 = 86_400;

pub struct ApiToken {
    pub access_token: String,
    pub expires_at: u64,
}

pub async fn fetch_auth_token(
    api_base_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String, String> {
    let token = fetch_auth_token_with_expiry(api_base_url, client_id, client_secret).await?;
    Ok(token.access_token)
}

pub async fn fetch_auth_token_with_expiry(
    api_base_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<ApiToken, String> {
    let client = Client::new();
    let token_url = format!("{}/auth", api_base_url.trim_end_matches('/'));

    let mut params = HashMap::new();
    params.insert("client_id", client_id);
    params.insert("client_secret", client_secret);

    let resp = client
        .post(&token_url)
        .form(&params)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.status().is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(body);
    }

    let json: Value = resp.json().await.map_err(|e| e.to_string())?;

    if let Some(false) = json.get("success").and_then(|v| v.as_bool()) {
        let message = json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .unwrap_or("unknown error");
        return Err(format!("Authentication failed: {}", message));
    }

    let access_token = json
        .get("data")
        .and_then(|data| data.get("token"))
        .and_then(|v| v.as_str())
        .ok_or("No token in response")?;

    if access_token.trim().is_empty() {
        return Err("Auth token was empty".to_string());
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| e.to_string())?
        .as_secs();

    Ok(ApiToken {
        access_token: access_token.to_string(),
        expires_at: now + TOKEN_TTL_SECS,
    })
}

pub async fn validate_credentials(
    api_base_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<(), String> {
    fetch_auth_token(api_base_url, client_id, client_secret).await?;
    Ok(())
}
