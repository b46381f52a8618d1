use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{
    DataSettings, LoggingSettings, ReportFormat, ReportSettings, ServerSettings, Settings,
};

/// Environment variables with this prefix override file values,
/// e.g. `FARMGATE__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "FARMGATE";

/// Loads the application settings.
///
/// Built-in defaults come first, then the TOML file at `path` (skipped if it does not
/// exist), then `FARMGATE__*` environment variables.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("data.sample_csv", "data/sample_data.csv")?
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 3000)?
        .set_default("logging.level", "info")?
        .set_default("logging.file_prefix", "farmgate.log")?
        .set_default("report.format", "table")?
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;

    tracing::debug!(path = %path.display(), "Settings loaded.");
    Ok(settings)
}
