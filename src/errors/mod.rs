use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum VisaidError {
    // Request input errors
    ValidationError {
        field: String,
        reason: String,
    },

    // Completion endpoint errors
    UpstreamEmptyError {
        operation: String,
    },
    UpstreamError {
        operation: String,
        status_code: Option<u16>,
        reason: String,
    },
    TruncatedResponseError {
        reason: String,
    },

    // Response repair errors
    ParseError {
        reason: String,
    },
    ShapeError {
        shape: String,
        reason: String,
    },

    // Template store errors
    StoreUnavailableError {
        operation: String,
        reason: String,
    },
    NotFoundError {
        resource: String,
        reason: String,
    },

    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl VisaidError {
    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn upstream_empty(operation: &str) -> Self {
        Self::UpstreamEmptyError {
            operation: operation.to_string(),
        }
    }

    pub fn upstream_error(operation: &str, status_code: Option<u16>, reason: &str) -> Self {
        Self::UpstreamError {
            operation: operation.to_string(),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn truncated_response(reason: &str) -> Self {
        Self::TruncatedResponseError {
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(reason: &str) -> Self {
        Self::ParseError {
            reason: reason.to_string(),
        }
    }

    pub fn shape_error(shape: &str, reason: &str) -> Self {
        Self::ShapeError {
            shape: shape.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn store_unavailable(operation: &str, reason: &str) -> Self {
        Self::StoreUnavailableError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(resource: &str, reason: &str) -> Self {
        Self::NotFoundError {
            resource: resource.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// HTTP status the error maps to when it reaches the API boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationError { .. } => 400,
            Self::NotFoundError { .. } => 404,
            Self::UpstreamEmptyError { .. }
            | Self::UpstreamError { .. }
            | Self::TruncatedResponseError { .. }
            | Self::ParseError { .. }
            | Self::ShapeError { .. }
            | Self::StoreUnavailableError { .. }
            | Self::ConfigurationError { .. }
            | Self::SystemError { .. } => 500,
        }
    }

    /// Flat message surfaced to API callers.
    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationError { reason, .. } => reason.clone(),
            Self::UpstreamEmptyError { operation } => {
                format!("No text was returned from the completion endpoint during {}.", operation)
            }
            Self::UpstreamError { operation, status_code, reason } => {
                let mut msg = format!("Completion endpoint error during {}: {}", operation, reason);
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (status {})", code));
                }
                msg
            }
            Self::TruncatedResponseError { reason } => reason.clone(),
            Self::ParseError { reason } => reason.clone(),
            Self::ShapeError { reason, .. } => reason.clone(),
            Self::StoreUnavailableError { operation, .. } => {
                format!("The template store is unavailable ({} failed).", operation)
            }
            Self::NotFoundError { reason, .. } => reason.clone(),
            Self::ConfigurationError { message, field } => {
                let mut msg = format!("Configuration error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for VisaidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for VisaidError {}

/// Result type alias for visaid operations
pub type VisaidResult<T> = Result<T, VisaidError>;

impl From<std::io::Error> for VisaidError {
    fn from(error: std::io::Error) -> Self {
        VisaidError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for VisaidError {
    fn from(error: serde_json::Error) -> Self {
        VisaidError::ParseError {
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for VisaidError {
    fn from(error: toml::de::Error) -> Self {
        VisaidError::ConfigurationError {
            message: error.message().to_string(),
            field: None,
        }
    }
}

impl From<reqwest::Error> for VisaidError {
    fn from(error: reqwest::Error) -> Self {
        VisaidError::UpstreamError {
            operation: "HTTP request".to_string(),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
