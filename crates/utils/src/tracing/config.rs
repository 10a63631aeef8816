//! Diagnostics configuration.

use super::verbosity::Verbosity;
use reclaim_core::{Error, Result, RECLAIM_VERBOSITY_VAR};

/// Configuration for the diagnostic subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiagnosticsConfig {
    /// Severity threshold
    pub verbosity: Verbosity,
}

impl DiagnosticsConfig {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Read the threshold from `RECLAIM_VERBOSITY`, falling back to the default
    pub fn from_env() -> Result<Self> {
        match std::env::var(RECLAIM_VERBOSITY_VAR) {
            Ok(value) => Ok(Self::new(value.parse()?)),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(Error::configuration(format!(
                "{RECLAIM_VERBOSITY_VAR} is not valid unicode: {e}"
            ))),
        }
    }

    /// Replace the threshold when one was given explicitly
    #[must_use]
    pub fn with_override(mut self, verbosity: Option<Verbosity>) -> Self {
        if let Some(verbosity) = verbosity {
            self.verbosity = verbosity;
        }
        self
    }
}
