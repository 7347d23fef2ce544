use crate::adapters::YELP_PAGE_LIMIT;
use crate::config::LeadsConfig;
use crate::core::normalize::normalize_business;
use crate::domain::model::{LeadRecord, LeadSource, YelpBusiness, YelpSearchResponse};
use crate::domain::ports::PlaceSource;
use crate::utils::error::{LeadsError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Yelp business search with bearer-token auth.
#[derive(Debug, Clone)]
pub struct YelpClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl YelpClient {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        }
    }

    pub fn from_config(client: Client, config: &LeadsConfig) -> Self {
        Self::new(client, config.yelp_endpoint.clone(), config.yelp_api_key.clone())
    }

    /// One page of up to [`YELP_PAGE_LIMIT`] businesses.
    pub async fn search(&self, term: &str, location: &str) -> Result<Vec<YelpBusiness>> {
        let limit = YELP_PAGE_LIMIT.to_string();
        let request = self
            .client
            .get(&self.endpoint)
            .bearer_auth(self.api_key.as_deref().unwrap_or_default())
            .query(&[
                ("term", term),
                ("location", location),
                ("limit", limit.as_str()),
            ]);

        tracing::debug!("Yelp request: term='{}' location='{}'", term, location);
        let response = request.send().await?;

        let status = response.status();
        tracing::debug!("Yelp response status: {}", status);
        if !status.is_success() {
            return Err(LeadsError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body: YelpSearchResponse = response.json().await?;
        Ok(body.businesses)
    }
}

#[async_trait]
impl PlaceSource for YelpClient {
    type Raw = YelpBusiness;

    fn source(&self) -> LeadSource {
        LeadSource::Yelp
    }

    async fn fetch(&self, term: &str, location: &str) -> Vec<YelpBusiness> {
        match self.search(term, location).await {
            Ok(businesses) => businesses,
            Err(e) => {
                tracing::warn!("Error fetching Yelp data: {}", e);
                Vec::new()
            }
        }
    }

    fn normalize(&self, raw: YelpBusiness, location: &str) -> LeadRecord {
        normalize_business(raw, location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_search_sends_bearer_token_and_parameters() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v3/businesses/search")
                .header("Authorization", "Bearer y-token")
                .query_param("term", "catering services")
                .query_param("location", "New York, USA")
                .query_param("limit", "50");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "total": 1,
                    "businesses": [{
                        "name": "Big Apple Catering",
                        "location": {"display_address": ["5 Wall St", "New York, NY 10005"]},
                        "review_count": 40,
                        "rating": 4.0
                    }]
                }));
        });

        let client = YelpClient::new(
            Client::new(),
            server.url("/v3/businesses/search"),
            Some("y-token".to_string()),
        );
        let businesses = client.search("catering services", "New York, USA").await.unwrap();

        api_mock.assert();
        assert_eq!(businesses.len(), 1);
        assert_eq!(businesses[0].name.as_deref(), Some("Big Apple Catering"));
        assert_eq!(
            businesses[0]
                .location
                .as_ref()
                .and_then(|l| l.display_address.clone()),
            Some(vec!["5 Wall St".to_string(), "New York, NY 10005".to_string()])
        );
    }

    #[tokio::test]
    async fn test_unauthorized_is_absorbed_by_fetch() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/v3/businesses/search");
            then.status(401).json_body(serde_json::json!({
                "error": {"code": "TOKEN_MISSING", "description": "An access token must be supplied"}
            }));
        });

        let client = YelpClient::new(Client::new(), server.url("/v3/businesses/search"), None);

        let err = client.search("personal chef", "Miami, USA").await.unwrap_err();
        assert!(matches!(err, LeadsError::UnexpectedStatus { status: 401, .. }));
        assert!(client.fetch("personal chef", "Miami, USA").await.is_empty());
        api_mock.assert_hits(2);
    }

    #[tokio::test]
    async fn test_missing_businesses_array_is_empty_page() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v3/businesses/search");
            then.status(200).json_body(serde_json::json!({"total": 0}));
        });

        let client = YelpClient::new(
            Client::new(),
            server.url("/v3/businesses/search"),
            Some("y-token".to_string()),
        );
        assert!(client.search("private chef", "Atlanta, USA").await.unwrap().is_empty());
    }
}
