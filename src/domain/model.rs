use serde::{Deserialize, Deserializer};
use std::fmt;

/// Placeholder written for optional fields a provider left out.
pub const NOT_AVAILABLE: &str = "N/A";

pub const LEAD_HEADERS: [&str; 8] = [
    "Name", "Location", "Address", "Contact", "Website", "Rating", "Reviews", "Source",
];

/// Which provider produced a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadSource {
    GooglePlaces,
    Yelp,
}

impl LeadSource {
    pub fn tag(&self) -> &'static str {
        match self {
            LeadSource::GooglePlaces => "Google Places",
            LeadSource::Yelp => "Yelp",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One cell of a lead row.
///
/// Providers disagree on types (Yelp's address is a list of lines, ratings are
/// numbers), so a cell keeps whatever shape the provider sent. `Absent` is a
/// field the provider omitted and that is not substituted with [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq)]
pub enum LeadValue {
    Text(String),
    Number(serde_json::Number),
    List(Vec<String>),
    Absent,
}

impl LeadValue {
    pub fn not_available() -> Self {
        LeadValue::Text(NOT_AVAILABLE.to_string())
    }

    pub fn text_or_na(value: Option<String>) -> Self {
        value.map_or_else(Self::not_available, LeadValue::Text)
    }

    pub fn number_or_na(value: Option<serde_json::Number>) -> Self {
        value.map_or_else(Self::not_available, LeadValue::Number)
    }

    pub fn text_or_absent(value: Option<String>) -> Self {
        value.map_or(LeadValue::Absent, LeadValue::Text)
    }

    pub fn is_not_available(&self) -> bool {
        matches!(self, LeadValue::Text(s) if s == NOT_AVAILABLE)
    }

    /// Cell text as written to the CSV file.
    pub fn to_cell(&self) -> String {
        match self {
            LeadValue::Text(s) => s.clone(),
            LeadValue::Number(n) => n.to_string(),
            LeadValue::List(lines) => lines.join(", "),
            LeadValue::Absent => String::new(),
        }
    }
}

impl From<&str> for LeadValue {
    fn from(value: &str) -> Self {
        LeadValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeadRecord {
    pub name: LeadValue,
    pub location: String,
    pub address: LeadValue,
    pub contact: LeadValue,
    pub website: LeadValue,
    pub rating: LeadValue,
    pub reviews: LeadValue,
    pub source: LeadSource,
}

impl LeadRecord {
    /// Cells in [`LEAD_HEADERS`] order.
    pub fn to_row(&self) -> [String; 8] {
        [
            self.name.to_cell(),
            self.location.clone(),
            self.address.to_cell(),
            self.contact.to_cell(),
            self.website.to_cell(),
            self.rating.to_cell(),
            self.reviews.to_cell(),
            self.source.tag().to_string(),
        ]
    }
}

/// A Google Places text-search result.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlaceResult {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<serde_json::Number>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub user_ratings_total: Option<serde_json::Number>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    /// Google reports denied keys and quota problems here with a 200 status.
    pub status: Option<String>,
    pub error_message: Option<String>,
}

/// A Yelp business search hit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct YelpBusiness {
    pub name: Option<String>,
    pub location: Option<YelpLocation>,
    pub phone: Option<String>,
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<serde_json::Number>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub review_count: Option<serde_json::Number>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct YelpLocation {
    pub display_address: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct YelpSearchResponse {
    #[serde(default)]
    pub businesses: Vec<YelpBusiness>,
}

/// Reads a JSON number or a numeric string. Any other value reads as missing,
/// so one oddly typed result does not fail the whole page.
fn lenient_number<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<serde_json::Number>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => Some(n),
        Some(serde_json::Value::String(s)) => s.trim().parse::<serde_json::Number>().ok(),
        _ => None,
    })
}
