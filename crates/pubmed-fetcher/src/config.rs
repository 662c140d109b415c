//! Configuration for the PubMed fetcher.

use std::time::Duration;

/// E-utilities API constants.
pub mod api {
    use std::time::Duration;

    /// Search endpoint (esearch).
    pub const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";

    /// Summary endpoint (esummary).
    pub const ESUMMARY_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";

    /// Database parameter sent with every request.
    pub const DATABASE: &str = "pubmed";

    /// Maximum number of search results retained per run.
    pub const RESULT_CAP: u32 = 10;

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Process configuration, built once at startup and handed to the client.
#[derive(Debug, Clone)]
pub struct Config {
    /// NCBI API key (optional).
    pub api_key: Option<String>,

    /// Search endpoint URL (overridable for testing with mock servers).
    pub esearch_url: String,

    /// Summary endpoint URL (overridable for testing with mock servers).
    pub esummary_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with an optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            esearch_url: api::ESEARCH_URL.to_string(),
            esummary_url: api::ESUMMARY_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            esearch_url: format!("{base_url}/entrez/eutils/esearch.fcgi"),
            esummary_url: format!("{base_url}/entrez/eutils/esummary.fcgi"),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var("PUBMED_API_KEY").ok().filter(|k| !k.is_empty());
        Self::new(api_key)
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.esearch_url, api::ESEARCH_URL);
    }

    #[test]
    fn test_config_with_api_key() {
        let config = Config::new(Some("test-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.api_key, Some("test-key".to_string()));
    }

    #[test]
    fn test_config_for_testing_rewrites_endpoints() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.esearch_url, "http://127.0.0.1:9999/entrez/eutils/esearch.fcgi");
        assert_eq!(config.esummary_url, "http://127.0.0.1:9999/entrez/eutils/esummary.fcgi");
        assert!(!config.has_api_key());
    }
}
