//! HTTP clients for the place-search providers.

pub mod google_places;
pub mod yelp;

pub use google_places::GooglePlacesClient;
pub use yelp::YelpClient;

/// Result page size requested from Yelp.
pub const YELP_PAGE_LIMIT: u32 = 50;
