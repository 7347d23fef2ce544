use crate::utils::error::{LeadsError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Optional overrides read from a TOML file.
///
/// ```toml
/// [providers]
/// google_places_endpoint = "https://maps.googleapis.com/maps/api/place/textsearch/json"
/// yelp_endpoint = "https://api.yelp.com/v3/businesses/search"
/// yelp_api_key = "${YELP_API_KEY}"
///
/// [search]
/// terms = ["private chef"]
/// locations = ["Miami, USA"]
///
/// [output]
/// path = "miami_leads.csv"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadsFile {
    pub providers: Option<ProvidersSection>,
    pub search: Option<SearchSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProvidersSection {
    pub google_places_endpoint: Option<String>,
    pub yelp_endpoint: Option<String>,
    pub google_api_key: Option<String>,
    pub yelp_api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchSection {
    pub terms: Option<Vec<String>>,
    pub locations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
}

impl LeadsFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| LeadsError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content, |name| std::env::var(name).ok())?;

        toml::from_str(&processed).map_err(|e| LeadsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR_NAME}` with the looked-up value. Unknown variables are
/// left as written.
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LeadsError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
