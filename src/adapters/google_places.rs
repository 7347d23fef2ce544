use crate::config::LeadsConfig;
use crate::core::normalize::normalize_place;
use crate::domain::model::{LeadRecord, LeadSource, PlaceResult, PlacesResponse};
use crate::domain::ports::PlaceSource;
use crate::utils::error::{LeadsError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Google Places text search: `GET <endpoint>?query=<term> in <location>&key=<key>`.
///
/// Only the first result page is read.
#[derive(Debug, Clone)]
pub struct GooglePlacesClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GooglePlacesClient {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        }
    }

    pub fn from_config(client: Client, config: &LeadsConfig) -> Self {
        Self::new(
            client,
            config.google_places_endpoint.clone(),
            config.places_api_key().map(str::to_string),
        )
    }

    /// Runs one text search. Any transport, status or decoding failure is
    /// returned as an error.
    pub async fn search(&self, term: &str, location: &str) -> Result<Vec<PlaceResult>> {
        let query = format!("{} in {}", term, location);

        let mut request = self.client.get(&self.endpoint).query(&[("query", query.as_str())]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        tracing::debug!("Google Places request: {} ({})", query, self.endpoint);
        let response = request.send().await?;

        let status = response.status();
        tracing::debug!("Google Places response status: {}", status);
        if !status.is_success() {
            return Err(LeadsError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body: PlacesResponse = response.json().await?;
        if let Some(api_status) = body.status.as_deref() {
            if api_status != "OK" && api_status != "ZERO_RESULTS" {
                tracing::warn!(
                    "Google Places returned status {} for '{}': {}",
                    api_status,
                    query,
                    body.error_message.as_deref().unwrap_or("no message")
                );
            }
        }

        Ok(body.results)
    }
}

#[async_trait]
impl PlaceSource for GooglePlacesClient {
    type Raw = PlaceResult;

    fn source(&self) -> LeadSource {
        LeadSource::GooglePlaces
    }

    async fn fetch(&self, term: &str, location: &str) -> Vec<PlaceResult> {
        match self.search(term, location).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!("Error fetching Google Places data: {}", e);
                Vec::new()
            }
        }
    }

    fn normalize(&self, raw: PlaceResult, location: &str) -> LeadRecord {
        normalize_place(raw, location)
    }
}
