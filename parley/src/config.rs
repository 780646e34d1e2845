use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One summary line per record.
    #[default]
    Short,
    /// Every field and both token sequences.
    Full,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server_name: String,
    pub nickname: String,
    #[serde(default)]
    pub format: Format,
    /// Drop records whose category could not be determined.
    #[serde(default)]
    pub skip_unknown: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_name: "localhost".to_string(),
            nickname: "parley".to_string(),
            format: Format::default(),
            skip_unknown: false,
        }
    }
}

impl Config {
    pub fn load_from_str(str: &str) -> Result<Self, anyhow::Error> {
        let config: Config = serde_yml::from_str(str)?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, anyhow::Error> {
        let string = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {path:?}"))?;
        Config::load_from_str(string.as_str()).with_context(|| format!("parsing {path:?}"))
    }
}
