use crate::error::ConfigError;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub data: DataSettings,
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub report: ReportSettings,
}

/// Where the bundled crop price data lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    /// CSV analyzed by the dashboard and by `analyze` when no file is given.
    /// Also the fallback when a submitted form has no usable rows.
    pub sample_csv: PathBuf,
}

/// Contains parameters for the HTTP API.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// An IP address, e.g. "127.0.0.1" or "0.0.0.0".
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as "info" or "farmgate=debug,tower_http=info".
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    pub format: ReportFormat,
}

/// How the CLI prints an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Table,
    Json,
}
