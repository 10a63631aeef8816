//! Core errors and constants for the `reclaim` workspace.
//!
//! Every fallible operation in the workspace returns [`Result`], the typed
//! replacement for a two-valued success/failure status token. The error
//! variants name the failure modes of the resource registry (allocation,
//! capacity) and of the propagation protocol (wrapped operation failures).
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum, the `Result` alias and `ResultExt`.
//! - **`constants`**: shared sizing defaults, environment variable names and
//!   diagnostic labels.

pub mod constants;
pub mod errors;

pub use self::{
    constants::*,
    errors::{format_location, Error, Result, ResultExt},
};
