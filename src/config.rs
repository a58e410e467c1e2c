use std::path::{Path, PathBuf};

/// Session settings, read from an optional TOML file.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Config {
    /// RNG seed for tile spawns. Drawn from OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Maximum number of undo snapshots. Unbounded when absent.
    #[serde(default)]
    pub history_limit: Option<usize>,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct LogConfig {
    #[serde(default = "defaults::log_enabled")]
    pub enabled: bool,
    #[serde(default = "defaults::log_path")]
    pub path: PathBuf,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            history_limit: None,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::log_enabled(),
            path: defaults::log_path(),
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn log_enabled() -> bool { true }
    pub fn log_path() -> PathBuf { PathBuf::from(crate::trace::DEFAULT_PATH) }
}
