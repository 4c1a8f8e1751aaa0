use anyhow::Context;
use power_restore::domain::settings::SettingsService;
use power_restore::infrastructure::logging;
use power_restore::{BuildInputs, ConfigGenerator};
use tracing::{debug, info, warn};

fn main() -> anyhow::Result<()> {
    let settings = SettingsService::new();
    let _logging_guard = logging::init_logger(&settings.get().log_settings)?;
    if let Some(path) = settings.path() {
        debug!("Settings path: {}", path.display());
    }

    let extra_args: Vec<String> = std::env::args().skip(1).collect();
    if !extra_args.is_empty() {
        warn!("build_config takes no arguments, ignoring: {:?}", extra_args);
    }

    let output_dir = std::env::current_dir().context("Could not determine working directory")?;
    let generator = ConfigGenerator::new(output_dir);
    info!(
        "Generating server configuration in {}",
        generator.output_dir().display()
    );

    let inputs = BuildInputs::from_env();
    if let Err(e) = generator.generate(&inputs) {
        let hint = e.remediation();
        let err = anyhow::Error::new(e);
        return Err(match hint {
            Some(hint) => err.context(hint),
            None => err,
        });
    }

    Ok(())
}
