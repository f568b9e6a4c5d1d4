use std::collections::HashMap;

use log::debug;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::LogLevel;
use crate::auth::token::{CachedToken, get_access_token};
use crate::personio::config::ClientConfig;
use crate::personio::employee::RawEmployee;
use crate::personio::parse::{parse_employee_from_response, parse_employees_from_response};

const LIST_PAGE_SIZE: usize = 200;

/// HTTP client for Personio Web API operations.
pub struct ServiceClient {
    client: Client,
    config: ClientConfig,
    token_cache: Mutex<HashMap<String, CachedToken>>,
    log_level: LogLevel,
}

impl ServiceClient {
    /// Create a new client for the given tenant configuration.
    pub fn new(config: ClientConfig, log_level: LogLevel) -> Self {
        Self {
            client: Client::new(),
            config,
            token_cache: Mutex::new(HashMap::new()),
            log_level,
        }
    }

    async fn access_token(&self) -> Result<String, String> {
        let key = self.config.client_id.clone();
        let mut cache = self.token_cache.lock().await;
        get_access_token(&self.config, &mut cache, &key).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url.trim_end_matches('/'), path)
    }

    /// Retrieve a single employee by Personio ID.
    pub async fn get_employee(&self, id: i64) -> Result<RawEmployee, String> {
        let token = self.access_token().await?;
        let url = self.endpoint(&format!("/company/employees/{}", id));

        if matches!(self.log_level, LogLevel::Debug) {
            debug!("Url: {:?}", url);
        }

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;

        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("Personio API error ({}): {}", status, body));
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| format!("Failed to parse JSON: {e}"))?;

        parse_employee_from_response(&json)
    }

    /// Retrieve all employees, handling paging when needed.
    pub async fn get_employees(&self) -> Result<Vec<RawEmployee>, String> {
        let token = self.access_token().await?;

        let mut offset = 0usize;
        let mut employees: Vec<RawEmployee> = vec![];

        loop {
            let url = self.endpoint(&format!(
                "/company/employees?limit={}&offset={}",
                LIST_PAGE_SIZE, offset
            ));

            if matches!(self.log_level, LogLevel::Debug) {
                debug!("Fetch offset: {}", offset);
                debug!("Url: {:?}", url);
            }

            let resp = self
                .client
                .get(&url)
                .bearer_auth(&token)
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| format!("Request failed: {e}"))?;

            let status = resp.status();

            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(format!("Personio API error ({}): {}", status, body));
            }

            let json: Value = resp
                .json()
                .await
                .map_err(|e| format!("Failed to parse JSON: {e}"))?;

            let page_employees = parse_employees_from_response(&json)?;
            let page_len = page_employees.len();
            employees.extend(page_employees);

            if page_len < LIST_PAGE_SIZE {
                break;
            }
            offset += page_len;
        }

        Ok(employees)
    }

    /// Validate the configured credentials against the auth endpoint.
    pub async fn validate(&self) -> Result<(), String> {
        self.access_token().await?;
        Ok(())
    }
}
