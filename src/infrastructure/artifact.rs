//! Configuration Artifact
//!
//! Renders a [`ServerConfig`] as plain `KEY = "value"` assignments and
//! reads it back. The file is valid TOML so the desktop program can load
//! it with the same parser.

use crate::domain::error::ConfigError;
use crate::domain::server_config::{base_url, ServerConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fixed file name of the artifact inside the output directory
pub const ARTIFACT_FILE_NAME: &str = "server_config.toml";

/// Header value used when no build time was supplied
pub const UNKNOWN_BUILD_TIME: &str = "N/A";

#[derive(Debug, Serialize, Deserialize)]
struct ArtifactValues {
    #[serde(rename = "HOST_IP", default)]
    host_ip: String,
    #[serde(rename = "HOST_PORT", default)]
    host_port: String,
    #[serde(rename = "API_BASE_URL", default)]
    api_base_url: String,
}

pub fn artifact_path(output_dir: &Path) -> PathBuf {
    output_dir.join(ARTIFACT_FILE_NAME)
}

/// Render the artifact text. Output depends only on the arguments.
pub fn render(config: &ServerConfig, build_time: Option<&str>) -> Result<String, ConfigError> {
    let values = ArtifactValues {
        host_ip: config.host_ip().to_string(),
        host_port: config.host_port().to_string(),
        api_base_url: config.api_base_url().to_string(),
    };
    let body = toml::to_string(&values)?;

    Ok(format!(
        "# Application configuration\n\
         # Generated at build time from HOST_IP / HOST_PORT\n\
         # Build time: {}\n\
         \n\
         # API server configuration\n\
         {}",
        build_time.unwrap_or(UNKNOWN_BUILD_TIME),
        body
    ))
}

/// Write `contents` to the artifact location, replacing any previous file.
///
/// Goes through a sibling temp file and a rename so readers never see a
/// half-written artifact.
pub fn write(output_dir: &Path, contents: &str) -> Result<PathBuf, ConfigError> {
    let path = artifact_path(output_dir);
    let tmp_path = output_dir.join(format!(".{}.tmp", ARTIFACT_FILE_NAME));

    let result = fs::write(&tmp_path, contents).and_then(|_| fs::rename(&tmp_path, &path));
    if let Err(e) = result {
        // A failed write may still have created the temp file
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(path)
}

/// Parse artifact text back into a [`ServerConfig`].
pub fn parse(contents: &str) -> Result<ServerConfig, ConfigError> {
    let values: ArtifactValues = toml::from_str(contents)?;
    let config = ServerConfig::new(values.host_ip, values.host_port)?;

    if values.api_base_url != config.api_base_url() {
        return Err(ConfigError::InconsistentBaseUrl {
            stored: values.api_base_url,
            expected: base_url(config.host_ip(), config.host_port()),
        });
    }

    Ok(config)
}

pub fn load(path: &Path) -> Result<ServerConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse(&contents)
}
