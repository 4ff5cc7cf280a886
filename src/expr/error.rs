use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("repetition minimum {min} exceeds maximum {max}")]
    RepeatBounds { min: u32, max: u32 },
    #[error("character class '{spec}' contains reversed range '{start}-{end}'")]
    ReversedRange { spec: String, start: char, end: char },
    #[error("character class '{spec}' has no members")]
    EmptyClass { spec: String },
    #[error("character class '{spec}' ends with a dangling escape")]
    DanglingEscape { spec: String },
    #[error(
        "group name '{name}' must start with a letter or underscore and contain only letters, digits or underscores"
    )]
    InvalidGroupName { name: String },
    #[error("alternation needs at least one branch")]
    EmptyAlternation,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
