use crate::adapters::{GooglePlacesClient, YelpClient};
use crate::config::LeadsConfig;
use crate::core::collector::LeadCollector;
use crate::core::export::export_csv;
use crate::domain::model::LeadSource;
use crate::domain::ports::PlaceSource;
use crate::utils::error::Result;
use reqwest::Client;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub google_places: usize,
    pub yelp: usize,
    pub output_path: String,
}

/// Collects leads from both providers and writes them to the configured file.
pub struct LeadEngine<P: PlaceSource, D: PlaceSource> {
    collector: LeadCollector<P, D>,
    config: LeadsConfig,
}

impl LeadEngine<GooglePlacesClient, YelpClient> {
    /// Engine backed by the real provider clients sharing one HTTP client.
    pub fn from_config(config: LeadsConfig) -> Self {
        let client = Client::new();
        let places = GooglePlacesClient::from_config(client.clone(), &config);
        let directory = YelpClient::from_config(client, &config);
        Self::new(LeadCollector::new(places, directory), config)
    }
}

impl<P: PlaceSource, D: PlaceSource> LeadEngine<P, D> {
    pub fn new(collector: LeadCollector<P, D>, config: LeadsConfig) -> Self {
        Self { collector, config }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!(
            "Collecting leads: {} search terms x {} locations ({} requests)",
            self.config.search_terms.len(),
            self.config.locations.len(),
            self.config.planned_requests()
        );

        let leads = self.collector.collect(&self.config).await;

        let google_places = leads
            .iter()
            .filter(|l| l.source == LeadSource::GooglePlaces)
            .count();
        let yelp = leads.len() - google_places;
        tracing::debug!("Google Places: {}, Yelp: {}", google_places, yelp);

        export_csv(&leads, &self.config.headers, &self.config.output_path)?;

        Ok(RunSummary {
            records: leads.len(),
            google_places,
            yelp,
            output_path: self.config.output_path.clone(),
        })
    }
}
