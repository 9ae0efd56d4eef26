//! HTTP transport layer for AlphaVantage API requests

use av_core::{Config, Error, FuncType, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// A decoded CSV payload: one object per row, keyed by the header row with
/// columns kept in header order.
pub type CsvRows = Vec<Map<String, Value>>;

/// HTTP transport layer for making requests to the AlphaVantage API
pub struct Transport {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
    max_retries: u32,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("av-client/0.1.0")
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            max_retries: config.max_retries,
        })
    }

    /// Create a mock transport for testing
    #[cfg(test)]
    pub fn new_mock() -> Self {
        Self {
            client: Client::new(),
            base_url: "https://mock.alphavantage.co/query".to_string(),
            api_key: "test_key".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 0,
        }
    }

    /// Make a GET request and decode the JSON body
    ///
    /// # Arguments
    ///
    /// * `function` - The AlphaVantage API function to call
    /// * `params` - Additional query parameters, in the order they should appear
    ///
    /// API notices delivered with a 200 status (`Error Message`, `Note`,
    /// `Information`) are turned into errors rather than decoded.
    #[instrument(skip(self, params), fields(function = %function))]
    pub async fn get<T>(&self, function: FuncType, params: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let text = self.get_text(function, params).await?;

        Self::check_api_error(&text)?;

        match serde_json::from_str::<T>(&text) {
            Ok(data) => {
                info!("Successfully parsed response for function: {}", function);
                Ok(data)
            }
            Err(e) => {
                error!("Failed to parse JSON response: {}", e);
                error!("Response text (first 500 chars): {}", snippet(&text, 500));
                Err(Error::Parse(format!(
                    "Failed to parse response: {}. Response: {}",
                    e,
                    snippet(&text, 200)
                )))
            }
        }
    }

    /// Make a GET request for a function that answers with CSV
    ///
    /// The first row is taken as the header. When the API answers with a JSON
    /// notice instead (rate limit, bad key) the notice is reported as an error.
    #[instrument(skip(self, params), fields(function = %function))]
    pub async fn get_csv(&self, function: FuncType, params: &[(&str, &str)]) -> Result<CsvRows> {
        let text = self.get_text(function, params).await?;

        if text.trim_start().starts_with('{') {
            Self::check_api_error(&text)?;
            return Err(Error::InvalidResponse(format!(
                "Expected CSV for {}, got JSON: {}",
                function,
                snippet(&text, 200)
            )));
        }

        let rows = parse_csv_rows(&text)?;
        info!("Parsed {} CSV rows for function: {}", rows.len(), function);
        Ok(rows)
    }

    /// Fetch the raw body, retrying transport failures with exponential backoff
    async fn get_text(&self, function: FuncType, params: &[(&str, &str)]) -> Result<String> {
        let url = self.build_url(function, params)?;
        debug!("Making request to: {}", self.redact(&url));

        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(2_u64.pow(attempt) * 1000); // Exponential backoff
                warn!("Retrying request in {}ms (attempt {})", delay.as_millis(), attempt + 1);
                tokio::time::sleep(delay).await;
            }

            match self.make_request(&url).await {
                Ok(response) => {
                    let text = response.text().await.map_err(|e| {
                        Error::Http(format!("Failed to read response body: {}", e))
                    })?;

                    debug!("Response body length: {} bytes", text.len());
                    return Ok(text);
                }
                Err(e) => {
                    warn!("Request failed (attempt {}): {}", attempt + 1, e);
                    last_error = Some(e);
                    attempt += 1;
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Http("Max retries exceeded".to_string())))
    }

    /// Build the full URL for an API request
    fn build_url(&self, function: FuncType, params: &[(&str, &str)]) -> Result<String> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", self.base_url, e)))?;

        {
            let mut query_pairs = url.query_pairs_mut();
            query_pairs.append_pair("function", &function.to_string());
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
            query_pairs.append_pair("apikey", &self.api_key);
        }

        Ok(url.to_string())
    }

    /// Make the actual HTTP request
    async fn make_request(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e.without_url())))?;

        let status = response.status();

        if status.is_success() {
            debug!("Request successful with status: {}", status);
            Ok(response)
        } else {
            error!("Request failed with status: {}", status);
            Err(Error::Http(format!("HTTP error: {}", status)))
        }
    }

    /// Check for AlphaVantage API notices in the response body
    fn check_api_error(response_text: &str) -> Result<()> {
        let Ok(Value::Object(body)) = serde_json::from_str::<Value>(response_text) else {
            return Ok(());
        };

        if let Some(message) = body.get("Error Message").and_then(Value::as_str) {
            if mentions_api_key(message) {
                return Err(Error::ApiKey(message.to_string()));
            }
            return Err(Error::Api(message.to_string()));
        }

        for key in ["Note", "Information"] {
            if let Some(message) = body.get(key).and_then(Value::as_str) {
                let lower = message.to_lowercase();
                if lower.contains("rate limit")
                    || lower.contains("call frequency")
                    || lower.contains("requests per")
                {
                    return Err(Error::RateLimit(message.to_string()));
                }
                if mentions_api_key(message) {
                    return Err(Error::ApiKey(message.to_string()));
                }
                return Err(Error::Api(message.to_string()));
            }
        }

        Ok(())
    }

    /// The URL with the API key masked, for logging
    fn redact(&self, url: &str) -> String {
        url.replace(&format!("apikey={}", self.api_key), "apikey=***")
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get request timeout duration
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

fn mentions_api_key(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("apikey") || lower.contains("api key")
}

fn snippet(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Decode a CSV body into header-keyed rows
///
/// Ragged rows are tolerated: missing trailing columns become `null` and
/// surplus fields are dropped.
pub(crate) fn parse_csv_rows(text: &str) -> Result<CsvRows> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| Error::Parse(format!("Invalid CSV header: {}", e)))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::Parse(format!("Invalid CSV row: {}", e)))?;
        let row = headers
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let value = record.get(i).map_or(Value::Null, |field| Value::String(field.to_string()));
                (column.to_string(), value)
            })
            .collect();
        rows.push(row);
    }

    Ok(rows)
}
