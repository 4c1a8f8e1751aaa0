//! Build-time server configuration for the power restore desktop tool.
//!
//! The `build_config` binary reads `HOST_IP` / `HOST_PORT` from the
//! environment and writes `server_config.toml`. The desktop program loads
//! that file once at start-up with [`infrastructure::artifact::load`] and
//! passes the value to whatever needs the API endpoint.

pub mod domain;
pub mod generator;
pub mod infrastructure;

pub use domain::error::ConfigError;
pub use domain::server_config::{ApiEndpoint, ServerConfig};
pub use generator::{ConfigGenerator, GeneratedArtifact};
pub use infrastructure::environment::BuildInputs;

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// Fresh directory under the system temp dir, removed on drop.
    pub struct ScratchDir {
        path: PathBuf,
    }

    impl ScratchDir {
        pub fn new(label: &str) -> Self {
            let n = COUNTER.fetch_add(1, Ordering::SeqCst);
            let path = std::env::temp_dir().join(format!(
                "power_restore_{}_{}_{}",
                label,
                std::process::id(),
                n
            ));
            let _ = std::fs::remove_dir_all(&path);
            std::fs::create_dir_all(&path).unwrap();
            Self { path }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}
