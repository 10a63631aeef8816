//! Builder methods for creating errors with context

use super::types::Error;
use std::borrow::Cow;
use std::collections::TryReserveError;
use std::panic::Location;
use std::path::PathBuf;

// Helper methods for creating errors with context
impl Error {
    /// Create an allocation error for a storage request of `requested` slots
    #[must_use]
    pub fn allocation(requested: usize, source: TryReserveError) -> Self {
        Error::Allocation { requested, source }
    }

    /// Create a capacity exceeded error
    #[must_use]
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Error::CapacityExceeded { capacity }
    }

    /// Create an invalid capacity error
    #[must_use]
    pub fn invalid_capacity(capacity: usize, message: impl Into<String>) -> Self {
        Error::InvalidCapacity {
            capacity,
            message: message.into(),
        }
    }

    /// Create an operation failure located at the caller
    #[must_use]
    #[track_caller]
    pub fn operation(message: impl Into<String>) -> Self {
        Error::Operation {
            location: format_location(Location::caller()),
            message: message.into(),
            source: None,
        }
    }

    /// Create an operation failure at an explicit location
    #[must_use]
    pub fn operation_at(location: &Location<'_>, message: impl Into<String>) -> Self {
        Error::Operation {
            location: format_location(location),
            message: message.into(),
            source: None,
        }
    }

    /// Create an operation failure wrapping the error that caused it
    #[must_use]
    pub fn operation_with_source(
        location: &Location<'_>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Operation {
            location: format_location(location),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a parse error
    #[must_use]
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Parse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// True for storage allocation failures
    pub fn is_allocation(&self) -> bool {
        matches!(self, Error::Allocation { .. })
    }

    /// True when a fixed registry ran out of slots
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Error::CapacityExceeded { .. })
    }

    /// True for failures raised by the propagation protocol
    pub fn is_operation(&self) -> bool {
        matches!(self, Error::Operation { .. })
    }

    /// Failure text without the location an operation failure carries
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Error::Operation { message, .. } => Cow::Borrowed(message),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Source location recorded for an operation failure
    pub fn location(&self) -> Option<&str> {
        match self {
            Error::Operation { location, .. } => Some(location),
            _ => None,
        }
    }
}

/// Render a source location the way diagnostics print it
pub fn format_location(location: &Location<'_>) -> String {
    format!("File: {}, Line: {}", location.file(), location.line())
}
