use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TcError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanserConfig {
    pub lexicon: LexiconConfig,
    pub batch: BatchConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Where the slang and abusive-word tables live and how they are encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub slang_path: PathBuf,
    pub abuse_path: PathBuf,
    /// Header of the token column in the abusive-word table.
    pub abuse_column: String,
    /// WHATWG encoding label, e.g. `latin1` or `utf-8`.
    pub encoding: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub text_column: String,
    /// Number of cleaned values echoed back in a CSV response.
    pub preview_rows: usize,
    pub encoding: String,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `pretty` or `json`.
    pub format: String,
    pub filter: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            slang_path: PathBuf::from("static/new_kamusalay.csv"),
            abuse_path: PathBuf::from("static/abusive.csv"),
            abuse_column: "ABUSIVE".into(),
            encoding: "latin1".into(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            text_column: "Tweet".into(),
            preview_rows: 15,
            encoding: "latin1".into(),
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: "pretty".into(),
            filter: "tc_server=info,tc_cleanser=info,warn".into(),
        }
    }
}

impl CleanserConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| TcError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
