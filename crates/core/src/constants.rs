/// Constants used throughout the reclaim codebase

// Versioning
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");
pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");
pub const VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");

// Registry sizing
pub const DEFAULT_INITIAL_CAPACITY: usize = 4;
pub const GROWTH_FACTOR: usize = 2;

// Environment variable names
pub const RECLAIM_VERBOSITY_VAR: &str = "RECLAIM_VERBOSITY";
pub const RECLAIM_LOG_VAR: &str = "RECLAIM_LOG";

// Diagnostic labels
pub const FAILURE_LABEL: &str = "Exception";
pub const WARNING_LABEL: &str = "Warning";
pub const INFO_LABEL: &str = "Info";
