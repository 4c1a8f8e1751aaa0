use thiserror::Error;

/// Errors raised while generating or loading the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required values were absent or empty.
    #[error("missing required configuration: {} not set", .missing.join(", "))]
    MissingRequiredConfiguration { missing: Vec<&'static str> },

    /// The stored base URL does not match the one derived from host and port.
    #[error("API_BASE_URL {stored:?} does not match derived {expected:?}")]
    InconsistentBaseUrl { stored: String, expected: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration artifact: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render configuration artifact: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    /// Names of the missing variables, empty for every other kind.
    pub fn missing_variables(&self) -> &[&'static str] {
        match self {
            Self::MissingRequiredConfiguration { missing } => missing,
            _ => &[],
        }
    }

    /// Hint for the user, only where re-running with different input helps.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequiredConfiguration { .. } => {
                Some("Set HOST_IP and HOST_PORT before building")
            }
            _ => None,
        }
    }
}
