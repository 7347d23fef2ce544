#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::LEAD_HEADERS;
use crate::utils::error::{LeadsError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_path, validate_required_field, validate_url, Validate,
};
use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

pub use toml_config::LeadsFile;

pub const DEFAULT_SEARCH_TERMS: [&str; 3] = ["private chef", "catering services", "personal chef"];

pub const DEFAULT_LOCATIONS: [&str; 10] = [
    "New York, USA",
    "Los Angeles, USA",
    "Chicago, USA",
    "San Francisco, USA",
    "Miami, USA",
    "Houston, USA",
    "Boston, USA",
    "Washington, USA",
    "Philadelphia, USA",
    "Atlanta, USA",
];

pub const DEFAULT_OUTPUT_PATH: &str = "chef_leads.csv";

/// Everything a run needs, built once at startup.
///
/// Credentials and endpoints are not required to be present: a missing
/// value only makes every request to that provider fail, which is logged
/// and skipped like any other request failure.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadsConfig {
    pub google_api_key: Option<String>,
    pub google_new_api_key: Option<String>,
    pub yelp_api_key: Option<String>,
    pub google_places_endpoint: String,
    pub yelp_endpoint: String,
    pub search_terms: Vec<String>,
    pub locations: Vec<String>,
    pub output_path: String,
    pub headers: Vec<String>,
}

impl Default for LeadsConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            google_new_api_key: None,
            yelp_api_key: None,
            google_places_endpoint: String::new(),
            yelp_endpoint: String::new(),
            search_terms: DEFAULT_SEARCH_TERMS.iter().map(|s| s.to_string()).collect(),
            locations: DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            headers: LEAD_HEADERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LeadsConfig {
    /// Reads the provider settings from the process environment, falling
    /// back to a `.env` file (searched from the working directory upwards).
    /// Variables already set in the process win over the file.
    pub fn from_env() -> Self {
        let file_vars: HashMap<String, String> = dotenvy::dotenv_iter()
            .map(|iter| iter.filter_map(|item| item.ok()).collect())
            .unwrap_or_default();
        Self::from_lookup(layered_lookup(file_vars))
    }

    /// Like [`LeadsConfig::from_env`] with an explicit dotenv file.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path).map_err(|e| LeadsError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;

        let mut file_vars = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| LeadsError::ConfigError {
                message: format!("invalid line in {}: {}", path.display(), e),
            })?;
            file_vars.insert(key, value);
        }

        Ok(Self::from_lookup(layered_lookup(file_vars)))
    }

    /// Builds the configuration from an environment lookup function.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let optional = |key: &str| lookup(key).ok();

        Self {
            google_api_key: optional("GOOGLE_API_KEY"),
            google_new_api_key: optional("GOOGLE_NEW_API_KEY"),
            yelp_api_key: optional("YELP_API_KEY"),
            google_places_endpoint: optional("GOOGLE_PLACES_ENDPOINT").unwrap_or_default(),
            yelp_endpoint: optional("YELP_API_ENDPOINT").unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Applies the values set in a TOML overrides file.
    pub fn apply_file(&mut self, file: LeadsFile) {
        if let Some(providers) = file.providers {
            if let Some(endpoint) = providers.google_places_endpoint {
                self.google_places_endpoint = endpoint;
            }
            if let Some(endpoint) = providers.yelp_endpoint {
                self.yelp_endpoint = endpoint;
            }
            if providers.google_api_key.is_some() {
                self.google_api_key = providers.google_api_key;
            }
            if providers.yelp_api_key.is_some() {
                self.yelp_api_key = providers.yelp_api_key;
            }
        }

        if let Some(search) = file.search {
            if let Some(terms) = search.terms {
                self.search_terms = terms;
            }
            if let Some(locations) = search.locations {
                self.locations = locations;
            }
        }

        if let Some(path) = file.output.and_then(|o| o.path) {
            self.output_path = path;
        }
    }

    /// Key sent to Google Places. Falls back to `GOOGLE_NEW_API_KEY`.
    pub fn places_api_key(&self) -> Option<&str> {
        self.google_api_key
            .as_deref()
            .or(self.google_new_api_key.as_deref())
    }

    /// Number of provider requests a full run makes.
    pub fn planned_requests(&self) -> usize {
        2 * self.search_terms.len() * self.locations.len()
    }

    /// Every configuration problem found, in field order.
    pub fn problems(&self) -> Vec<LeadsError> {
        let places_key = self.places_api_key().map(str::to_string);
        let checks = [
            validate_url("GOOGLE_PLACES_ENDPOINT", &self.google_places_endpoint),
            validate_url("YELP_API_ENDPOINT", &self.yelp_endpoint),
            validate_required_field("GOOGLE_API_KEY", &places_key).map(|_| ()),
            validate_required_field("YELP_API_KEY", &self.yelp_api_key).map(|_| ()),
            validate_non_empty_list("search_terms", &self.search_terms),
            validate_non_empty_list("locations", &self.locations),
            validate_path("output_path", &self.output_path),
        ];

        checks.into_iter().filter_map(|check| check.err()).collect()
    }
}

fn layered_lookup(
    file_vars: HashMap<String, String>,
) -> impl Fn(&str) -> std::result::Result<String, VarError> {
    move |key: &str| {
        std::env::var(key).or_else(|_| file_vars.get(key).cloned().ok_or(VarError::NotPresent))
    }
}

impl Validate for LeadsConfig {
    fn validate(&self) -> Result<()> {
        match self.problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }
}
