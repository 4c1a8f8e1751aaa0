//! Server Configuration
//!
//! The API endpoint the desktop program talks to. Built once from the
//! build inputs, baked into the configuration artifact, and handed to the
//! program explicitly at start-up.

use crate::domain::error::ConfigError;

/// Environment variable holding the API host.
pub const HOST_IP_VAR: &str = "HOST_IP";

/// Environment variable holding the API port.
pub const HOST_PORT_VAR: &str = "HOST_PORT";

/// Remote API operations used by the desktop program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEndpoint {
    /// Fetch restore instructions for a device (POST)
    GetData,
    /// Fetch first-use initialization instructions (GET)
    InitData,
    /// Report device firmware info (POST)
    DeviceInfo,
}

impl ApiEndpoint {
    /// Path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::GetData => "apigetdata",
            Self::InitData => "apiinitdata",
            Self::DeviceInfo => "apideviceinfo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    host_ip: String,
    host_port: String,
    api_base_url: String,
}

impl ServerConfig {
    /// Build a config from host and port. Both must be non-empty.
    pub fn new(
        host_ip: impl Into<String>,
        host_port: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let host_ip = host_ip.into();
        let host_port = host_port.into();

        let mut missing = Vec::new();
        if host_ip.is_empty() {
            missing.push(HOST_IP_VAR);
        }
        if host_port.is_empty() {
            missing.push(HOST_PORT_VAR);
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingRequiredConfiguration { missing });
        }

        let api_base_url = base_url(&host_ip, &host_port);
        Ok(Self {
            host_ip,
            host_port,
            api_base_url,
        })
    }

    pub fn host_ip(&self) -> &str {
        &self.host_ip
    }

    pub fn host_port(&self) -> &str {
        &self.host_port
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Full URL for an API operation
    pub fn endpoint_url(&self, endpoint: ApiEndpoint) -> String {
        format!("{}/{}", self.api_base_url, endpoint.path())
    }
}

/// `https://{host}:{port}`
pub fn base_url(host_ip: &str, host_port: &str) -> String {
    format!("https://{}:{}", host_ip, host_port)
}
