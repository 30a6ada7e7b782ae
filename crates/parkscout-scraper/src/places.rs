//! Client for the nearby-places radius search API.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ScraperError;

/// Search radius around the origin zipcode, in miles.
const RADIUS_MILES: &str = "10";
/// Maximum number of results per search.
const MAX_MATCHES: &str = "10";

/// HTTP client for the radius-search endpoint.
///
/// Returns the response payload as raw JSON; normalization for display is
/// the caller's concern, as is memoizing the result onto the originating
/// site so it is not fetched twice.
pub struct PlacesClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl PlacesClient {
    /// Creates a `PlacesClient` for the given endpoint and credential.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidEndpoint`] — `endpoint` is not a valid URL.
    /// - [`ScraperError::Http`] — the underlying `reqwest::Client` cannot
    ///   be constructed.
    pub fn new(
        endpoint: &str,
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ScraperError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_owned(),
        })
    }

    /// Runs one radius search around `zipcode` and returns the payload
    /// unmodified.
    ///
    /// Query parameters are fixed: 10-mile radius, at most 10 matches,
    /// ambiguities ignored, JSON output.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] — non-2xx response.
    /// - [`ScraperError::Deserialize`] — response body is not valid JSON.
    /// - [`ScraperError::Http`] — network failure.
    pub async fn nearby(&self, zipcode: &str) -> Result<Value, ScraperError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("origin", zipcode)
            .append_pair("radius", RADIUS_MILES)
            .append_pair("maxMatches", MAX_MATCHES)
            .append_pair("ambiguities", "ignore")
            .append_pair("outFormat", "json");

        tracing::debug!(origin = zipcode, "radius search");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            // Report the bare endpoint: the full request URL carries the
            // credential in its query string.
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ScraperError::Deserialize {
            context: format!("radius search for {zipcode}"),
            source: e,
        })
    }
}
