use serde::Deserialize;

/// Default base URL of the Personio v1 REST API.
pub const API_BASE_URL_DEFAULT: &str = "https://api.personio.de/v1";

const CLIENT_ID_ENV_KEY: &str = "PERSONIO_CLIENT_ID";
const CLIENT_SECRET_ENV_KEY: &str = "PERSONIO_CLIENT_SECRET";
const API_BASE_URL_ENV_KEY: &str = "PERSONIO_API_URL";

/// API credentials and endpoint of one Personio tenant.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_base_url")]
    pub api_base_url: String,
}

fn default_base_url() -> String {
    API_BASE_URL_DEFAULT.to_string()
}

impl ClientConfig {
    pub fn new(client_id: &str, client_secret: &str, api_base_url: &str) -> Self {
        ClientConfig {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            api_base_url: coalesce_empty(&[api_base_url, API_BASE_URL_DEFAULT]),
        }
    }

    /// Build a configuration from the `PERSONIO_CLIENT_ID`,
    /// `PERSONIO_CLIENT_SECRET` and `PERSONIO_API_URL` environment variables.
    pub fn from_env() -> Result<Self, String> {
        let client_id = std::env::var(CLIENT_ID_ENV_KEY).unwrap_or_default();
        let client_secret = std::env::var(CLIENT_SECRET_ENV_KEY).unwrap_or_default();
        let api_base_url = std::env::var(API_BASE_URL_ENV_KEY).unwrap_or_default();

        if client_id.trim().is_empty() || client_secret.trim().is_empty() {
            return Err(format!(
                "{} and {} must be set",
                CLIENT_ID_ENV_KEY, CLIENT_SECRET_ENV_KEY
            ));
        }

        Ok(ClientConfig::new(&client_id, &client_secret, &api_base_url))
    }
}

/// Returns the first non-empty value, or an empty string if none is found.
pub(crate) fn coalesce_empty(values: &[&str]) -> String {
    for value in values {
        if !value.is_empty() {
            return value.to_string();
        }
    }
    String::new()
}
