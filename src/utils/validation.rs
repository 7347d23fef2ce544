use crate::utils::error::{LeadsError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LeadsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LeadsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LeadsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LeadsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LeadsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| LeadsError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// Rejects an empty list and any blank entry in it.
pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(LeadsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List cannot be empty".to_string(),
        });
    }

    for value in values {
        if value.trim().is_empty() {
            return Err(LeadsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: "Value cannot be empty or whitespace-only".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("google_places_endpoint", "https://maps.googleapis.com/x").is_ok());
        assert!(validate_url("google_places_endpoint", "http://localhost:8080").is_ok());
        assert!(validate_url("google_places_endpoint", "").is_err());
        assert!(validate_url("google_places_endpoint", "invalid-url").is_err());
        assert!(validate_url("google_places_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "chef_leads.csv").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0name.csv").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("token".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("yelp_api_key", &present).unwrap(), "token");

        let err = validate_required_field("yelp_api_key", &missing).unwrap_err();
        assert!(matches!(err, LeadsError::MissingConfigError { field } if field == "yelp_api_key"));
    }

    #[test]
    fn test_validate_non_empty_list() {
        let terms = vec!["private chef".to_string()];
        assert!(validate_non_empty_list("search_terms", &terms).is_ok());
        assert!(validate_non_empty_list("search_terms", &[]).is_err());

        let blank = vec!["private chef".to_string(), "  ".to_string()];
        assert!(validate_non_empty_list("search_terms", &blank).is_err());
    }
}
