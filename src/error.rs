//! Error handling for the skill-gap advisor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Catalog load error: {0}")]
    CatalogLoad(String),

    #[error("Course not found: {name}")]
    CourseNotFound {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

impl AdvisorError {
    /// Closest known course name when the error is a missed similarity target.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            AdvisorError::CourseNotFound { suggestion, .. } => suggestion.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AdvisorError::CourseNotFound { .. })
    }
}

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AdvisorError {
    fn from(err: anyhow::Error) -> Self {
        AdvisorError::Processing(err.to_string())
    }
}

impl From<toml::de::Error> for AdvisorError {
    fn from(err: toml::de::Error) -> Self {
        AdvisorError::CatalogLoad(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_carries_suggestion() {
        let err = AdvisorError::CourseNotFound {
            name: "Deep Lerning".to_string(),
            suggestion: Some("Deep Learning".to_string()),
        };
        assert!(err.is_not_found());
        assert_eq!(err.suggestion(), Some("Deep Learning"));
        assert_eq!(err.to_string(), "Course not found: Deep Lerning");
    }

    #[test]
    fn test_conversions() {
        let err: AdvisorError = anyhow::anyhow!("vectorizer failed").into();
        assert!(matches!(err, AdvisorError::Processing(_)));
        assert!(err.suggestion().is_none());

        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        assert!(matches!(AdvisorError::from(toml_err), AdvisorError::CatalogLoad(_)));
    }

    #[test]
    fn test_rendering_failures_surface_as_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AdvisorError::from(json_err);
        assert!(matches!(err, AdvisorError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
