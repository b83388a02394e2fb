use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Course catalog unavailable at {location}: {reason}")]
    CatalogUnavailable { location: String, reason: String },

    #[error("Course catalog at {location} contains no courses")]
    CatalogEmpty { location: String },

    #[error("No course matches '{query}' (best confidence {best_confidence})")]
    NotFound { query: String, best_confidence: u8 },

    #[error("Profile is too ambiguous to score: interest and career role are both unsure")]
    AmbiguousProfile,

    #[error("Unknown course: {name}")]
    UnknownCourse { name: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Lookup,
    Profile,
    Configuration,
    Network,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AdvisorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdvisorError::CatalogUnavailable { .. } | AdvisorError::CatalogEmpty { .. } => {
                ErrorCategory::Catalog
            }
            AdvisorError::NotFound { .. } | AdvisorError::UnknownCourse { .. } => {
                ErrorCategory::Lookup
            }
            AdvisorError::AmbiguousProfile => ErrorCategory::Profile,
            AdvisorError::HttpError(_) => ErrorCategory::Network,
            AdvisorError::IoError(_) => ErrorCategory::Io,
            AdvisorError::CsvError(_) | AdvisorError::SerializationError(_) => ErrorCategory::Data,
            AdvisorError::ConfigError { .. }
            | AdvisorError::InvalidConfigValueError { .. }
            | AdvisorError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 呼叫端可直接以選單或提示回應，不算失敗
            AdvisorError::NotFound { .. } | AdvisorError::AmbiguousProfile => ErrorSeverity::Low,
            AdvisorError::UnknownCourse { .. } | AdvisorError::HttpError(_) => {
                ErrorSeverity::Medium
            }
            AdvisorError::CatalogUnavailable { .. }
            | AdvisorError::CatalogEmpty { .. }
            | AdvisorError::CsvError(_)
            | AdvisorError::ConfigError { .. }
            | AdvisorError::InvalidConfigValueError { .. }
            | AdvisorError::ConfigValidationError { .. } => ErrorSeverity::High,
            AdvisorError::IoError(_) | AdvisorError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AdvisorError::CatalogUnavailable { location, .. } => format!(
                "Check that the course catalog at '{}' exists and is reachable",
                location
            ),
            AdvisorError::CatalogEmpty { location } => format!(
                "Add at least one course row below the header of '{}'",
                location
            ),
            AdvisorError::NotFound { .. } => {
                "Try a course name such as \"Data Science\", \"Full Stack\" or \"SDET\"".to_string()
            }
            AdvisorError::AmbiguousProfile => {
                "Pick one of the discovery options to narrow down your interest".to_string()
            }
            AdvisorError::UnknownCourse { .. } => {
                "Run the `list` command to see the exact course names".to_string()
            }
            AdvisorError::HttpError(_) => {
                "Check the network connection and the catalog URL, then retry".to_string()
            }
            AdvisorError::CsvError(_) => {
                "Make sure the catalog is valid CSV with a course_name header".to_string()
            }
            AdvisorError::IoError(_) => "Check file permissions and disk space".to_string(),
            AdvisorError::SerializationError(_) => {
                "Report this issue; the output could not be encoded".to_string()
            }
            AdvisorError::ConfigError { .. }
            | AdvisorError::ConfigValidationError { .. } => {
                "Review the configuration file against the documented sections".to_string()
            }
            AdvisorError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and try again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AdvisorError::CatalogUnavailable { .. } => {
                "Course database not found. Please contact support.".to_string()
            }
            AdvisorError::CatalogEmpty { .. } => {
                "No courses are available right now.".to_string()
            }
            AdvisorError::NotFound { .. } => "I couldn't identify that course.".to_string(),
            AdvisorError::AmbiguousProfile => {
                "Let me help you discover the right path first.".to_string()
            }
            AdvisorError::UnknownCourse { .. } => {
                "Let me help you find the right course first!".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
