/// Authentication helpers for the Personio token flow.
pub mod auth;
/// Personio-specific types, the attribute projection engine and the service client.
pub mod personio;

/// Logging verbosity for client operations.
#[derive(Debug, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Emit verbose debug output.
    Debug,
    /// Emit standard informational output.
    Information,
}

impl Default for LogLevel {
    /// Defaults to `Information` logging.
    fn default() -> Self {
        LogLevel::Information
    }
}
