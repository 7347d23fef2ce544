use crate::domain::model::{LeadRecord, LeadSource};
use async_trait::async_trait;

/// A place-search provider queried once per (term, location) pair.
#[async_trait]
pub trait PlaceSource: Send + Sync {
    /// Provider-native result shape.
    type Raw: Send;

    fn source(&self) -> LeadSource;

    /// One search request. Failures are absorbed: they are logged and
    /// reported as an empty page.
    async fn fetch(&self, term: &str, location: &str) -> Vec<Self::Raw>;

    fn normalize(&self, raw: Self::Raw, location: &str) -> LeadRecord;
}
