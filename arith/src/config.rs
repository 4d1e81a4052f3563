#![deny(warnings)]

use crate::error::ConfigError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_derive::Deserialize;

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Config {
    /// How deep grammar rules may nest while parsing before the input is
    /// rejected. 0 removes the limit. The parser's default when unset.
    pub max_depth: Option<usize>,

    /// A table of variable bindings every evaluation starts with.
    pub vars: Option<HashMap<String, f64>>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        Config::parse(&config_str)
    }

    pub fn parse(config_str: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(config_str)?)
    }
}
