use crate::aggregators::rolling_average::RollingAverage;
use crate::types::errors::Result;
use config::{Config, File};
use serde_derive::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct LoggerConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            ansi: default_ansi(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_ansi() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
#[allow(unused)]
pub struct Settings {
    #[serde(default)]
    pub rolling_average: RollingAverage,
    #[serde(default)]
    pub logger: LoggerConfig,
}

impl Settings {
    /// Loads settings from `config_filename` (extension optional) and validates the rolling average section.
    pub fn new(config_filename: &str) -> Result<Self> {
        let s = Config::builder()
            .add_source(File::with_name(config_filename))
            .build()?;
        let settings: Settings = s.try_deserialize()?;
        settings.rolling_average.validate()?;
        Ok(settings)
    }
}
