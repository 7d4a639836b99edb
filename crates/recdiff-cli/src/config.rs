use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Settings read from a `--config` TOML file. Command-line flags win.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Key field for collection diffs when `--key` is not given.
    pub key_field: Option<String>,
    /// Indent JSON output.
    pub pretty: bool,
    /// Colorize text output.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            key_field: None,
            pretty: true,
            color: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file. Missing keys take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// The key field to use: an explicit flag first, then the configured one.
    pub fn resolve_key<'a>(&'a self, flag: Option<&'a str>) -> Option<&'a str> {
        flag.or(self.key_field.as_deref())
    }
}
