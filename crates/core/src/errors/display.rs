//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Allocation { requested, source } => {
                write!(
                    f,
                    "could not allocate registry storage for {requested} entries: {source}"
                )
            }
            Error::CapacityExceeded { capacity } => {
                write!(f, "registry full, cannot add more than {capacity} handles")
            }
            Error::InvalidCapacity { capacity, message } => {
                write!(f, "invalid registry capacity {capacity}: {message}")
            }
            Error::Operation {
                location, message, ..
            } => {
                write!(f, "{location}: {message}")
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system {} operation failed for '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::Parse { input, message } => {
                write!(f, "{input} {message}")
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
        }
    }
}
