use thiserror::Error;

/// Arithmetic guards raised by the performance estimator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("budget must be positive, got {budget}")]
    NonPositiveBudget { budget: f64 },

    #[error("budget must be a finite number, got {budget}")]
    NonFiniteBudget { budget: f64 },

    #[error("budget {budget} yields counts too large to represent")]
    EstimateOutOfRange { budget: f64 },

    #[error("cost per click rounds to zero for industry '{industry}'")]
    ZeroCostPerClick { industry: String },

    #[error("click-through rate rounds to zero for industry '{industry}'")]
    ZeroClickThroughRate { industry: String },
}

#[derive(Error, Debug)]
pub enum CampaignError {
    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Estimation error: {0}")]
    Domain(#[from] DomainError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Estimation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CampaignError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        CampaignError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CampaignError::ValidationError { .. } => ErrorCategory::Input,
            CampaignError::Domain(_) => ErrorCategory::Estimation,
            CampaignError::ConfigError { .. } | CampaignError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CampaignError::IoError(_)
            | CampaignError::SerializationError(_)
            | CampaignError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Estimation | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CampaignError::ValidationError { field, .. } => {
                format!("Provide a non-empty value for '{}' and try again", field)
            }
            CampaignError::Domain(DomainError::NonPositiveBudget { .. }) => {
                "Use a daily budget greater than zero".to_string()
            }
            CampaignError::Domain(
                DomainError::NonFiniteBudget { .. } | DomainError::EstimateOutOfRange { .. },
            ) => "Use a smaller daily budget or a shorter projection window".to_string(),
            CampaignError::Domain(_) => {
                "Check the [estimator] base_cpc setting, it must be at least 0.01".to_string()
            }
            CampaignError::ConfigError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            CampaignError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in your configuration", field)
            }
            CampaignError::IoError(_) => {
                "Check that the output directory is writable".to_string()
            }
            CampaignError::SerializationError(_) | CampaignError::CsvError(_) => {
                "Retry with --format text".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CampaignError::ValidationError { field, .. } => {
                format!("Please fill in all required fields (missing: {})", field)
            }
            CampaignError::Domain(e) => format!("Could not estimate performance: {}", e),
            CampaignError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            CampaignError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => format!("Unexpected failure: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, CampaignError>;
