use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no capture group named '{name}' in pattern '{pattern}'")]
    UnknownName { name: String, pattern: String },
    #[error("capture ordinal {ordinal} is out of range; pattern has {group_count} groups")]
    OrdinalOutOfRange { ordinal: usize, group_count: usize },
}

pub type LookupResult<T> = Result<T, LookupError>;
