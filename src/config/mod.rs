//! Configuration management for `tickets_rust`.
//!
//! Configuration is layered, later layers winning:
//! - Built-in defaults
//! - YAML config file (`--config <path>`, else `./tickets.yaml` if present)
//! - Environment variables (`TICKETS_FILE`, `TICKETS_BIND`, via clap)
//! - Command-line flags
//!
//! The resolved [`Config`] is passed explicitly to the store; nothing reads
//! the environment after startup.

use std::fs;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, Result};

/// Tickets file used when nothing else is configured.
pub const DEFAULT_TICKETS_FILE: &str = "tickets.json";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "tickets.yaml";

/// Port used when nothing else is configured.
pub const DEFAULT_PORT: u16 = 7071;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location of the JSON ticket array.
    pub tickets_path: PathBuf,
    /// Address the HTTP server listens on.
    pub bind: SocketAddr,
    /// Create an empty tickets file on server start if absent.
    pub create_if_missing: bool,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tickets_path: PathBuf::from(DEFAULT_TICKETS_FILE),
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            create_if_missing: true,
            log_format: LogFormat::Text,
        }
    }
}

/// Values settable from the YAML file. All optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub tickets_path: Option<PathBuf>,
    pub bind: Option<SocketAddr>,
    pub create_if_missing: Option<bool>,
    pub log_format: Option<LogFormat>,
}

/// Values taken from flags or their environment variables.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit config file; must exist if given.
    pub config: Option<PathBuf>,
    pub tickets_path: Option<PathBuf>,
    pub bind: Option<SocketAddr>,
    pub create_if_missing: Option<bool>,
    pub log_json: bool,
}

impl Config {
    /// Resolve configuration relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns `Config` if an explicit config file is missing or any config
    /// file is malformed.
    pub fn load(overrides: &CliOverrides) -> Result<Self> {
        Self::load_from(Path::new("."), overrides)
    }

    /// Resolve configuration, looking for the implicit config file in `dir`.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_from(dir: &Path, overrides: &CliOverrides) -> Result<Self> {
        let mut config = Self::default();

        let file = match &overrides.config {
            Some(path) => Some((read_file_config(path)?, path.clone())),
            None => {
                let implicit = dir.join(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Some((read_file_config(&implicit)?, implicit))
                } else {
                    None
                }
            }
        };
        if let Some((file, path)) = file {
            config.apply_file(file, path.parent());
        }

        config.apply_overrides(overrides);
        Ok(config)
    }

    /// Relative `tickets_path` values resolve against the config file's directory.
    fn apply_file(&mut self, file: FileConfig, base: Option<&Path>) {
        if let Some(path) = file.tickets_path {
            self.tickets_path = match base {
                Some(base) if path.is_relative() && !base.as_os_str().is_empty() => {
                    base.join(path)
                }
                _ => path,
            };
        }
        if let Some(bind) = file.bind {
            self.bind = bind;
        }
        if let Some(create) = file.create_if_missing {
            self.create_if_missing = create;
        }
        if let Some(format) = file.log_format {
            self.log_format = format;
        }
    }

    fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(path) = &overrides.tickets_path {
            self.tickets_path.clone_from(path);
        }
        if let Some(bind) = overrides.bind {
            self.bind = bind;
        }
        if let Some(create) = overrides.create_if_missing {
            self.create_if_missing = create;
        }
        if overrides.log_json {
            self.log_format = LogFormat::Json;
        }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::config(format!("cannot read {}: {e}", path.display())))?;
    if text.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml::from_str(&text)
        .map_err(|e| AppError::config(format!("invalid config {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path(), &CliOverrides::default()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tickets_path, PathBuf::from("tickets.json"));
        assert_eq!(config.bind.port(), DEFAULT_PORT);
    }

    #[test]
    fn test_implicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "tickets_path: data/tickets.json\nbind: 0.0.0.0:9000\ncreate_if_missing: false\nlog_format: json\n",
        )
        .unwrap();

        let config = Config::load_from(dir.path(), &CliOverrides::default()).unwrap();
        assert_eq!(config.tickets_path, dir.path().join("data/tickets.json"));
        assert_eq!(config.bind, "0.0.0.0:9000".parse().unwrap());
        assert!(!config.create_if_missing);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_absolute_path_in_config_kept() {
        let dir = tempfile::tempdir().unwrap();
        let absolute = dir.path().join("elsewhere.json");
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            format!("tickets_path: {}\n", absolute.display()),
        )
        .unwrap();

        let config = Config::load_from(dir.path(), &CliOverrides::default()).unwrap();
        assert_eq!(config.tickets_path, absolute);
    }

    #[test]
    fn test_overrides_beat_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "tickets_path: from-file.json\nbind: 127.0.0.1:1000\n",
        )
        .unwrap();
        let overrides = CliOverrides {
            tickets_path: Some(PathBuf::from("from-flag.json")),
            bind: Some("127.0.0.1:2000".parse().unwrap()),
            log_json: true,
            ..Default::default()
        };

        let config = Config::load_from(dir.path(), &overrides).unwrap();
        assert_eq!(config.tickets_path, PathBuf::from("from-flag.json"));
        assert_eq!(config.bind.port(), 2000);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = CliOverrides {
            config: Some(dir.path().join("nope.yaml")),
            ..Default::default()
        };
        let err = Config::load_from(dir.path(), &overrides).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "bind: [not, an, addr]\n").unwrap();
        let err = Config::load_from(dir.path(), &CliOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "ticket_path: typo.json\n").unwrap();
        assert!(Config::load_from(dir.path(), &CliOverrides::default()).is_err());
    }

    #[test]
    fn test_empty_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "\n").unwrap();
        let config = Config::load_from(dir.path(), &CliOverrides::default()).unwrap();
        assert_eq!(config, Config::default());
    }
}
