use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILENAME, DEFAULT_INDENT, DEFAULT_LOG_LEVEL};

/// How trees are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tree notation (S-expressions)
    #[default]
    Sexp,
    /// JSON, one object per node
    Json,
}

/// Application configuration with layered defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Indent width for tree notation output
    pub indent: usize,

    /// Default output format
    pub format: OutputFormat,

    /// Include `:file`/`:line` in tree notation output
    pub show_locations: bool,

    /// Minimum level for log output on stderr
    pub log_level: String,

    /// Whether to color terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            format: OutputFormat::Sexp,
            show_locations: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// An explicit `path` must exist; otherwise `.cascade.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        let file_config = match path {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file {} does not exist", path.display());
                }
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(CONFIG_FILENAME);
                if default_path.exists() {
                    Self::load_from_file(&default_path)?
                } else {
                    None
                }
            }
        };

        if let Some(file_config) = file_config {
            config.merge(file_config);
        }

        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Option<PartialConfig>> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: PartialConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(Some(config))
    }

    /// Merge partial config into this one (partial takes precedence for specified fields)
    fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.indent {
            self.indent = val;
        }
        if let Some(val) = other.format {
            self.format = val;
        }
        if let Some(val) = other.show_locations {
            self.show_locations = val;
        }
        if let Some(val) = other.log_level {
            self.log_level = val;
        }
        if let Some(val) = other.color {
            self.color = val;
        }
    }

    /// The configured log level, as understood by the tracing subscriber
    pub fn tracing_level(&self) -> Result<tracing::Level> {
        self.log_level
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown log level '{}'", self.log_level))
    }
}

/// Partial configuration for deserializing from TOML with optional fields
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    indent: Option<usize>,
    format: Option<OutputFormat>,
    show_locations: Option<bool>,
    log_level: Option<String>,
    color: Option<bool>,
}
