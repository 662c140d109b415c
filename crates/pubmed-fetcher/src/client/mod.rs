//! NCBI E-utilities API client.
//!
//! One reqwest client covers both endpoints the pipeline needs: esearch
//! (identifier search) and esummary (batched summary fetch). Requests are
//! issued one at a time; there is no retry layer and no request pacing.

use reqwest::Client;
use serde_json::{Map, Value};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{EsearchResponse, SummaryEnvelope};

/// E-utilities client.
#[derive(Clone)]
pub struct EntrezClient {
    /// Underlying HTTP client.
    client: Client,

    /// API key (optional), sent as the `api_key` query parameter when set.
    api_key: Option<String>,

    /// Search endpoint URL.
    esearch_url: String,

    /// Summary endpoint URL.
    esummary_url: String,
}

impl EntrezClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key,
            esearch_url: config.esearch_url,
            esummary_url: config.esummary_url,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search for papers matching the query.
    ///
    /// Returns identifiers in relevance order, at most
    /// [`api::RESULT_CAP`] of them, empty when the response carries none.
    ///
    /// # Errors
    ///
    /// Returns error on network failure or a non-success status.
    pub async fn search_ids(&self, query: &str) -> ClientResult<Vec<String>> {
        let mut params = vec![
            ("db".to_string(), api::DATABASE.to_string()),
            ("term".to_string(), query.to_string()),
            ("retmode".to_string(), "json".to_string()),
            ("retmax".to_string(), api::RESULT_CAP.to_string()),
        ];
        self.push_api_key(&mut params);

        let response: EsearchResponse = self.get(&self.esearch_url, &params).await?;
        Ok(response.esearchresult.idlist)
    }

    /// Fetch summary records for the given identifiers in one batched request.
    ///
    /// Returns the identifier → summary map in response order, empty when the
    /// response carries none. An empty identifier list short-circuits to an
    /// empty map without touching the network.
    ///
    /// # Errors
    ///
    /// Returns error on network failure or a non-success status.
    pub async fn fetch_summaries(&self, ids: &[String]) -> ClientResult<Map<String, Value>> {
        if ids.is_empty() {
            tracing::warn!("no paper ids retrieved, skipping summary fetch");
            return Ok(Map::new());
        }

        let mut params = vec![
            ("db".to_string(), api::DATABASE.to_string()),
            ("id".to_string(), ids.join(",")),
            ("retmode".to_string(), "json".to_string()),
        ];
        self.push_api_key(&mut params);

        let envelope: SummaryEnvelope = self.get(&self.esummary_url, &params).await?;
        Ok(envelope.result)
    }

    fn push_api_key(&self, params: &mut Vec<(String, String)>) {
        if let Some(key) = &self.api_key {
            params.push(("api_key".to_string(), key.clone()));
        }
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).query(params).send().await?;
        let response = Self::handle_response(response).await?;
        response.json().await.map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        match status.as_u16() {
            500..=599 => Err(ClientError::server(status.as_u16(), text)),
            _ => Err(ClientError::unexpected_status(status.as_u16(), text)),
        }
    }
}

impl std::fmt::Debug for EntrezClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntrezClient")
            .field("has_api_key", &self.has_api_key())
            .field("esearch_url", &self.esearch_url)
            .field("esummary_url", &self.esummary_url)
            .finish()
    }
}
