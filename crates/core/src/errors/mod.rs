//! Error types and result extensions for reclaim operations

mod builders;
mod conversions;
mod display;
mod extensions;
mod types;

#[cfg(test)]
mod tests;

pub use builders::*;
pub use extensions::*;
pub use types::{Error, Result};
