use crate::config::LeadsConfig;
use crate::domain::model::LeadRecord;
use crate::domain::ports::PlaceSource;

/// Walks every (term, location) pair and asks both providers, places first.
///
/// Requests are issued one at a time. Records keep request order: grouped by
/// pair in configuration order, places results before directory results
/// within a pair. Nothing is deduplicated.
pub struct LeadCollector<P: PlaceSource, D: PlaceSource> {
    places: P,
    directory: D,
}

impl<P: PlaceSource, D: PlaceSource> LeadCollector<P, D> {
    pub fn new(places: P, directory: D) -> Self {
        Self { places, directory }
    }

    pub async fn collect(&self, config: &LeadsConfig) -> Vec<LeadRecord> {
        self.collect_pairs(&config.search_terms, &config.locations)
            .await
    }

    pub async fn collect_pairs(&self, terms: &[String], locations: &[String]) -> Vec<LeadRecord> {
        let mut leads = Vec::new();

        for term in terms {
            for location in locations {
                let before = leads.len();
                collect_from(&self.places, term, location, &mut leads).await;
                collect_from(&self.directory, term, location, &mut leads).await;
                tracing::info!(
                    "'{}' in {}: {} leads",
                    term,
                    location,
                    leads.len() - before
                );
            }
        }

        leads
    }
}

async fn collect_from<S: PlaceSource>(
    source: &S,
    term: &str,
    location: &str,
    leads: &mut Vec<LeadRecord>,
) {
    let results = source.fetch(term, location).await;
    tracing::debug!("{} returned {} results", source.source(), results.len());
    leads.extend(
        results
            .into_iter()
            .map(|raw| source.normalize(raw, location)),
    );
}
