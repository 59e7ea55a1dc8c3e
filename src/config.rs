//! Tool configuration.
//!
//! Every setting has a stock default, so the tool runs with no config at all.
//! A `treebook.toml` in the working directory (or the file named by
//! `--config`) overrides any subset of keys, and CLI flags override both:
//!
//! ```text
//! stock defaults  <  treebook.toml  <  --input / --content-dir / --summary
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! input = "/home/ubuntu/output.log"   # Tree listing to read
//! content_dir = "your-content"        # Where stub pages are written
//! summary_path = "SUMMARY.md"         # Table of contents file
//! summary_title = "Summary"           # Heading of the table of contents
//! placeholder = "*Add content here*"  # Body of every stub page
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_INPUT: &str = "/home/ubuntu/output.log";
pub const DEFAULT_CONTENT_DIR: &str = "your-content";
pub const DEFAULT_SUMMARY_PATH: &str = "SUMMARY.md";
pub const DEFAULT_SUMMARY_TITLE: &str = "Summary";
pub const DEFAULT_PLACEHOLDER: &str = "*Add content here*";

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "treebook.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tree listing to read.
    pub input: PathBuf,
    /// Directory that receives the stub pages.
    pub content_dir: PathBuf,
    /// Path of the generated table of contents.
    pub summary_path: PathBuf,
    /// Heading text of the table of contents.
    pub summary_title: String,
    /// Body text written below the heading of every stub.
    pub placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            summary_path: PathBuf::from(DEFAULT_SUMMARY_PATH),
            summary_title: DEFAULT_SUMMARY_TITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "content_dir must not be empty".into(),
            ));
        }
        if self.summary_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "summary_path must not be empty".into(),
            ));
        }
        if self.summary_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "summary_title must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Prefix used for links in the summary: the content directory with
    /// forward slashes.
    pub fn link_base(&self) -> String {
        self.content_dir.to_string_lossy().replace('\\', "/")
    }
}

/// Command-line overrides applied on top of the loaded config.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub content_dir: Option<PathBuf>,
    pub summary_path: Option<PathBuf>,
}

impl Overrides {
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(dir) = self.content_dir {
            config.content_dir = dir;
        }
        if let Some(path) = self.summary_path {
            config.summary_path = path;
        }
        config
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(Config::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<Config, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: Config = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the configuration.
///
/// With `explicit` set, that file must exist. Otherwise `treebook.toml` in
/// `cwd` is used if present, and stock defaults if not.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => cwd.join(DEFAULT_CONFIG_FILE),
    };
    let overlay = if path.exists() {
        let content = fs::read_to_string(&path)?;
        Some(toml::from_str::<toml::Value>(&content)?)
    } else {
        None
    };
    resolve_config(overlay)
}

/// Returns a fully commented stock `treebook.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# treebook configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Command-line flags (--input, --content-dir, --summary) override these.
# Unknown keys will cause an error.

# Tree listing to read (output of a `tree`-style command).
input = "/home/ubuntu/output.log"

# Directory that receives one markdown stub per tree line.
content_dir = "your-content"

# Table of contents file, linking every stub.
summary_path = "SUMMARY.md"

# Heading of the table of contents.
summary_title = "Summary"

# Body written below the heading of every stub.
placeholder = "*Add content here*"
"##
}
