//! Core error type definitions

use std::collections::TryReserveError;
use std::path::PathBuf;

/// Result type alias for reclaim operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for reclaim operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Registry storage could not be obtained (construction or growth)
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// A fixed-capacity registry has no free slot
    CapacityExceeded { capacity: usize },

    /// A capacity that can never hold an entry or cannot be doubled
    InvalidCapacity { capacity: usize, message: String },

    /// A wrapped sub-operation reported failure
    Operation {
        location: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Input that could not be parsed
    Parse { input: String, message: String },

    /// Configuration errors
    Configuration { message: String },
}
