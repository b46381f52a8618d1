use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("server.host must be an IP address, got '{0}'")]
    InvalidHost(String),

    #[error("Invalid logging.level '{level}': {reason}")]
    InvalidLogLevel { level: String, reason: String },

    #[error("Failed to install the tracing subscriber: {0}")]
    Tracing(String),
}
