use std::fmt::{self, Display};

use da_core::ports::BoxError;
use mongodb::error::ErrorKind;
use thiserror::Error;

/// Store-native failure categories reported across the outbound contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreErrorKind {
    /// A single-document lookup matched nothing.
    NoMatch,
    Connection,
    Query,
    Serialization,
    Other,
}

impl Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreErrorKind::NoMatch => write!(f, "no match"),
            StoreErrorKind::Connection => write!(f, "connection"),
            StoreErrorKind::Query => write!(f, "query"),
            StoreErrorKind::Serialization => write!(f, "serialization"),
            StoreErrorKind::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct StoreError {
    kind: StoreErrorKind,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl StoreError {
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        kind: StoreErrorKind,
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn no_match() -> Self {
        Self::new(StoreErrorKind::NoMatch, "no document matched the filter")
    }

    pub fn kind(&self) -> StoreErrorKind {
        self.kind
    }
}

/// Classify a driver error by what went wrong, not where.
pub fn classify_driver_error(kind: &ErrorKind) -> StoreErrorKind {
    match kind {
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::Authentication { .. }
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => StoreErrorKind::Connection,
        ErrorKind::Command(_) | ErrorKind::Write(_) | ErrorKind::InvalidArgument { .. } => {
            StoreErrorKind::Query
        }
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            StoreErrorKind::Serialization
        }
        _ => StoreErrorKind::Other,
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        let kind = classify_driver_error(&err.kind);
        Self {
            kind,
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
