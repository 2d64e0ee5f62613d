//! Configuration file loading.
//!
//! ```json
//! {
//!   "rules": {
//!     "unit-no-unknown": [true, { "ignore": ["/^x-/"] }],
//!     "value-list-comma-newline-before": "always-multi-line",
//!     "selector-pseudo-element-colon-notation": null
//!   }
//! }
//! ```
//!
//! A `null` setting turns a rule off.

use std::fs;
use std::path::{Path, PathBuf};

use quill_lint::{find_rule, Linter, RuleSetting};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = ".quillrc.json";

/// Errors while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown rule \"{0}\"")]
    UnknownRule(String),
    #[error("expected {0} to be an object")]
    NotAnObject(&'static str),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    rules: Option<Value>,
}

/// Enabled rules and their settings, in rule-name order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    rules: Vec<(String, RuleSetting)>,
}

impl Config {
    /// Parse configuration text.
    pub fn from_json_str(text: &str) -> Result<Config, ConfigError> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(ConfigError::NotAnObject("the configuration"));
        }
        let file: ConfigFile = serde_json::from_value(value)?;
        let rules = match file.rules {
            None => Map::new(),
            Some(Value::Object(rules)) => rules,
            Some(_) => return Err(ConfigError::NotAnObject("\"rules\"")),
        };

        let mut config = Config::default();
        for (name, value) in rules {
            if find_rule(&name).is_none() {
                return Err(ConfigError::UnknownRule(name));
            }
            match RuleSetting::from_config(&value) {
                Some(setting) => config.rules.push((name, setting)),
                None => tracing::debug!(rule = %name, "rule disabled"),
            }
        }
        Ok(config)
    }

    /// Read and parse the configuration at `path`.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading configuration");
        Config::from_json_str(&text)
    }

    /// Load `explicit` if given, else [`DEFAULT_CONFIG_FILE`] from `dir`.
    pub fn locate(explicit: Option<&Path>, dir: &Path) -> Result<Config, ConfigError> {
        match explicit {
            Some(path) => Config::load(path),
            None => Config::load(&dir.join(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Enabled rules with their settings.
    pub fn rules(&self) -> &[(String, RuleSetting)] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Configure a [`Linter`] with every enabled rule.
    pub fn linter(&self) -> Linter {
        Linter::from_settings(
            self.rules
                .iter()
                .map(|(name, setting)| (name.as_str(), setting.clone())),
        )
    }
}
