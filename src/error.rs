use std::path::PathBuf;

use crate::limits::{Acclimatization, CrewType};

#[derive(thiserror::Error, Debug)]
pub enum FtlError {
    #[error("Configuration unavailable, failed to load '{path}': {message}")]
    ConfigurationUnavailable { path: PathBuf, message: String },
    #[error("No FTL limit for {crew_type} crew ({acclimatization}) under '{key}'")]
    LimitNotFound {
        crew_type: CrewType,
        acclimatization: Acclimatization,
        key: String,
    },
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
}
