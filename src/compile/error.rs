use thiserror::Error;

use super::OptionsError;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("regex engine rejected rendered pattern '{pattern}': {source}")]
    Engine {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("capture group name '{name}' is used by both group {first} and group {second}")]
    DuplicateGroupName {
        name: String,
        first: usize,
        second: usize,
    },
    #[error("name registry disagrees with the engine for pattern '{pattern}': {detail}")]
    RegistryMismatch { pattern: String, detail: String },
    #[error(transparent)]
    Options(#[from] OptionsError),
}

pub type CompileResult<T> = Result<T, CompileError>;
