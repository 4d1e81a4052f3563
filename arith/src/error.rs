#![deny(warnings)]

use descent::ParseError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Unbound variable: {0}")]
    UnboundVariable(String),
    // The tree doesn't have the shape the arithmetic grammar produces
    #[error("Malformed tree: {0}")]
    MalformedTree(String),
}

/// Anything that can go wrong between input text and a value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file")]
    Io(#[from] std::io::Error),
    #[error("parsing config file")]
    Toml(#[from] toml::de::Error),
}
