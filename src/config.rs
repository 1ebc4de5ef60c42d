//! On-disk CLI configuration, merged with command-line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli_error::CliError;

const CONFIG_FILE_NAME: &str = "glintsh.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub verbose: bool,
    pub no_color: bool,
}

impl Config {
    /// Loads config from `explicit_path` if given, otherwise from `dirs::config_dir()/glintsh.toml`
    /// if that file exists. Returns the default config if no file is found.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, CliError> {
        let path = match explicit_path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };

        match path {
            Some(p) => {
                let text = std::fs::read_to_string(&p)?;
                let config: Config = toml::from_str(&text)?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
