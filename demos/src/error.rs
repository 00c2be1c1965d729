//! Error types for the demo

use std::path::PathBuf;

use thiserror::Error;
use tilepath::Point;
use tilepath_maps::MapError;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid map: {0}")]
    Map(#[from] MapError),

    #[error("no {what} given: mark it in the map or pass --{flag}")]
    MissingEndpoint {
        what: &'static str,
        flag: &'static str,
    },

    #[error("no path from {from} to {to}")]
    NoPath { from: Point, to: Point },
}

pub type Result<T> = std::result::Result<T, DemoError>;
