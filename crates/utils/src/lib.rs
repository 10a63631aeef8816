//! Shared utilities for reclaim
//!
//! Currently this is the diagnostic sink: a `tracing` subscriber that gates
//! events by severity and renders them in the `<location>, <Label>:` shape.

pub mod tracing;

pub use self::tracing::{DiagnosticsConfig, DiagnosticsFormat, Verbosity};
