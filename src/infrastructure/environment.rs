//! Build inputs read from the process environment.

use crate::domain::error::ConfigError;
use crate::domain::server_config::{ServerConfig, HOST_IP_VAR, HOST_PORT_VAR};
use std::env::VarError;
use tracing::warn;

/// Optional label recorded in the artifact header.
pub const BUILD_TIME_VAR: &str = "BUILD_TIME";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInputs {
    pub host_ip: Option<String>,
    pub host_port: Option<String>,
    pub build_time: Option<String>,
}

impl BuildInputs {
    pub fn from_env() -> Self {
        Self::from_var_results(|key| std::env::var(key))
    }

    /// Gather inputs through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_var_results(|key| lookup(key).ok_or(VarError::NotPresent))
    }

    /// Values that are set but not valid UTF-8 are treated as unset, with a
    /// warning so the later "not set" error isn't the only thing reported.
    fn from_var_results<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let read = |key: &str| match lookup(key) {
            Ok(value) if !value.is_empty() => Some(value),
            Ok(_) | Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(raw)) => {
                warn!("{} is set but not valid UTF-8 ({:?}), ignoring it", key, raw);
                None
            }
        };
        Self {
            host_ip: read(HOST_IP_VAR),
            host_port: read(HOST_PORT_VAR),
            build_time: read(BUILD_TIME_VAR),
        }
    }

    pub fn resolve(&self) -> Result<ServerConfig, ConfigError> {
        ServerConfig::new(
            self.host_ip.clone().unwrap_or_default(),
            self.host_port.clone().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn inputs(pairs: &[(&str, &str)]) -> BuildInputs {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BuildInputs::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_reads_all_inputs() {
        let inputs = inputs(&[
            ("HOST_IP", "192.168.1.100"),
            ("HOST_PORT", "8887"),
            ("BUILD_TIME", "2024-05-01T10:00:00Z"),
        ]);
        assert_eq!(inputs.host_ip.as_deref(), Some("192.168.1.100"));
        assert_eq!(inputs.build_time.as_deref(), Some("2024-05-01T10:00:00Z"));
        let config = inputs.resolve().unwrap();
        assert_eq!(config.api_base_url(), "https://192.168.1.100:8887");
    }

    #[test]
    fn test_empty_value_is_unset() {
        let inputs = inputs(&[("HOST_IP", ""), ("HOST_PORT", "8887"), ("BUILD_TIME", "")]);
        assert_eq!(inputs.host_ip, None);
        assert_eq!(inputs.build_time, None);
        let err = inputs.resolve().unwrap_err();
        assert_eq!(err.missing_variables(), &["HOST_IP"]);
    }

    #[test]
    fn test_missing_port() {
        let err = inputs(&[("HOST_IP", "10.0.0.2")]).resolve().unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequiredConfiguration { .. }));
        assert_eq!(err.missing_variables(), &["HOST_PORT"]);
    }

    #[test]
    fn test_non_unicode_value_reported_as_missing() {
        let inputs = BuildInputs::from_var_results(|key| match key {
            "HOST_IP" => Err(VarError::NotUnicode(std::ffi::OsString::from("bad"))),
            "HOST_PORT" => Ok("8887".to_string()),
            _ => Err(VarError::NotPresent),
        });
        assert_eq!(inputs.host_ip, None);
        assert_eq!(inputs.host_port.as_deref(), Some("8887"));
        assert_eq!(inputs.resolve().unwrap_err().missing_variables(), &["HOST_IP"]);
    }
}
