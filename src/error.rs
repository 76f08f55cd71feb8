//! Application-level error, one variant per stage.

use crate::config::ConfigError;
use crate::data::{LoaderError, ProcessorError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Process(#[from] ProcessorError),
    #[error("Cannot open chart window: {0}")]
    RenderEnvironment(String),
}
