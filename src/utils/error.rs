use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadsError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LeadsError {
    /// Short console message for errors that end the run.
    pub fn user_friendly_message(&self) -> String {
        match self {
            LeadsError::IoError(e) => format!("Could not write the leads file: {}", e),
            LeadsError::CsvError(e) => format!("Could not write CSV output: {}", e),
            LeadsError::ConfigError { message } => format!("Configuration problem: {}", message),
            LeadsError::MissingConfigError { field } => {
                format!("Missing configuration value: {}", field)
            }
            LeadsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LeadsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_mentions_leads_file() {
        let err = LeadsError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(err.user_friendly_message().contains("leads file"));
        assert!(err.user_friendly_message().contains("denied"));
    }

    #[test]
    fn test_status_error_display() {
        let err = LeadsError::UnexpectedStatus {
            status: 403,
            url: "https://api.yelp.com/v3/businesses/search".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected HTTP status 403 from https://api.yelp.com/v3/businesses/search"
        );
    }
}
