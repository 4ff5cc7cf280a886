use crate::compile::{CompileError, OptionsError};
use crate::expr::ConfigError;
use crate::matcher::LookupError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

pub type PatternResult<T> = Result<T, PatternError>;
