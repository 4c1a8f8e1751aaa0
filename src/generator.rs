use crate::domain::error::ConfigError;
use crate::domain::server_config::ServerConfig;
use crate::infrastructure::artifact;
use crate::infrastructure::environment::BuildInputs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of a successful generator run
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub config: ServerConfig,
    pub path: PathBuf,
    pub contents: String,
}

/// Turns build inputs into the configuration artifact on disk.
pub struct ConfigGenerator {
    output_dir: PathBuf,
}

impl ConfigGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn artifact_path(&self) -> PathBuf {
        artifact::artifact_path(&self.output_dir)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Validate inputs and write the artifact.
    ///
    /// Nothing is written when a required input is missing.
    pub fn generate(&self, inputs: &BuildInputs) -> Result<GeneratedArtifact, ConfigError> {
        let config = inputs.resolve()?;

        let contents = artifact::render(&config, inputs.build_time.as_deref())?;
        let path = artifact::write(&self.output_dir, &contents)?;

        info!("Configuration file generated: {}", path.display());
        info!("  HOST_IP: {}", config.host_ip());
        info!("  HOST_PORT: {}", config.host_port());
        info!("  API_BASE_URL: {}", config.api_base_url());

        Ok(GeneratedArtifact {
            config,
            path,
            contents,
        })
    }
}
