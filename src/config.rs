use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "datekit.toml";

/// Top-level datekit configuration.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatekitConfig {
    /// Work-schedule defaults.
    #[serde(default)]
    pub schedule: ScheduleToml,

    /// Output formatting settings.
    #[serde(default)]
    pub format: FormatToml,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScheduleToml {
    #[serde(default = "default_work_days")]
    pub work_days: u32,
    #[serde(default = "default_off_days")]
    pub off_days: u32,
}

impl Default for ScheduleToml {
    fn default() -> Self {
        Self {
            work_days: default_work_days(),
            off_days: default_off_days(),
        }
    }
}

fn default_work_days() -> u32 {
    2
}
fn default_off_days() -> u32 {
    2
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FormatToml {
    #[serde(default = "default_clock")]
    pub clock: String,
}

impl Default for FormatToml {
    fn default() -> Self {
        Self {
            clock: default_clock(),
        }
    }
}

fn default_clock() -> String {
    "12h".to_string()
}

impl DatekitConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and built-in defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_PATH);
                if !fallback.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }
}
