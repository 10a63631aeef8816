//! Extension traits for error handling

use super::types::{Error, Result};

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    #[track_caller]
    fn context(self, message: impl Into<String>) -> Result<T> {
        let location = std::panic::Location::caller();
        self.map_err(|e| {
            let base_error = e.into();
            Error::operation_with_source(location, message, base_error)
        })
    }

    #[track_caller]
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        let location = std::panic::Location::caller();
        self.map_err(|e| {
            let base_error = e.into();
            Error::operation_with_source(location, f(), base_error)
        })
    }
}
