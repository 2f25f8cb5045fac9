use std::fmt;

use thiserror::Error;

/// What went wrong while classifying or parsing a single hand.
///
/// Every variant carries the line that could not be understood.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum HandErrorKind {
    #[error("Unknown network: {0}")]
    UnrecognizedFormat(String),

    #[error("Unable to parse hand id: {0}")]
    MalformedIdentifier(String),

    #[error("Game type not recognised: {0}")]
    UnrecognizedGameType(String),

    #[error("Unable to parse blind amounts: {0}")]
    MalformedHeaderLine(String),

    #[error("Unable to parse table header: {0}")]
    MalformedTableHeader(String),

    #[error("Unknown play money table header: {0}")]
    NonPlayMoneyTable(String),
}

/// A failure confined to one hand. The batch carries on with the next one.
///
/// Once the hand id has been parsed it is attached so the diagnostic line
/// can point at the offending hand.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct HandError {
    pub kind: HandErrorKind,
    pub id: Option<String>,
}

impl HandError {
    pub fn new(kind: HandErrorKind) -> Self {
        Self { kind, id: None }
    }

    pub fn with_id(kind: HandErrorKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: Some(id.into()),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{} -> id: {}", self.kind, id),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for HandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Failures that stop the whole run rather than a single hand.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid converter configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for stream level operations
pub type Result<T> = std::result::Result<T, ConvertError>;
