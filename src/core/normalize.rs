//! Provider results to [`LeadRecord`]s.
//!
//! Optional fields fall back to `"N/A"`, with two exceptions:
//! a missing business name stays empty for both providers, and Yelp's address
//! is passed through as the provider's list of display lines (empty when
//! missing).

use crate::domain::model::{LeadRecord, LeadSource, LeadValue, PlaceResult, YelpBusiness};

pub fn normalize_place(place: PlaceResult, location: &str) -> LeadRecord {
    LeadRecord {
        name: LeadValue::text_or_absent(place.name),
        location: location.to_string(),
        address: LeadValue::text_or_na(place.formatted_address),
        contact: LeadValue::text_or_na(place.formatted_phone_number),
        website: LeadValue::text_or_na(place.website),
        rating: LeadValue::number_or_na(place.rating),
        reviews: LeadValue::number_or_na(place.user_ratings_total),
        source: LeadSource::GooglePlaces,
    }
}

pub fn normalize_business(business: YelpBusiness, location: &str) -> LeadRecord {
    let address = business
        .location
        .and_then(|l| l.display_address)
        .map_or(LeadValue::Absent, LeadValue::List);

    LeadRecord {
        name: LeadValue::text_or_absent(business.name),
        location: location.to_string(),
        address,
        contact: LeadValue::text_or_na(business.phone),
        website: LeadValue::text_or_na(business.url),
        rating: LeadValue::number_or_na(business.rating),
        reviews: LeadValue::number_or_na(business.review_count),
        source: LeadSource::Yelp,
    }
}
