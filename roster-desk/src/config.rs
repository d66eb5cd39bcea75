//! Desk configuration

use roster_client::ClientConfig;

/// Configuration loaded from environment variables
///
/// - `ROSTER_API_URL` - employee API base URL (default `http://localhost:5205`)
/// - `ROSTER_TIMEOUT_SECS` - request timeout in seconds (default 30)
/// - `ROSTER_LOG` - filter for the in-app log pane (default `info`)
#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub api_url: String,
    pub timeout_secs: u64,
    pub log_filter: String,
}

impl DeskConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("ROSTER_API_URL")
                .unwrap_or_else(|_| "http://localhost:5205".to_string()),
            timeout_secs: std::env::var("ROSTER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_filter: std::env::var("ROSTER_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Client configuration for the employee API
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone()).with_timeout(self.timeout_secs)
    }
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_backend() {
        // Only meaningful when the vars are unset, as in CI
        if std::env::var("ROSTER_API_URL").is_err() {
            let config = DeskConfig::from_env();
            assert_eq!(config.api_url, "http://localhost:5205");
            assert_eq!(config.timeout_secs, 30);
        }
    }

    #[test]
    fn test_client_config_carries_url_and_timeout() {
        let config = DeskConfig {
            api_url: "http://10.0.0.5:5205".to_string(),
            timeout_secs: 5,
            log_filter: "debug".to_string(),
        };
        let client = config.client_config();
        assert_eq!(client.base_url, "http://10.0.0.5:5205");
        assert_eq!(client.timeout, 5);
    }
}
