//! Resource-tracking registry and failure propagation.
//!
//! A [`Registry`] records every acquired resource together with the action
//! that releases it. When an operation fails, the protocol combinators in
//! [`protocol`] drain the registry, releasing each resource exactly once,
//! before the failure reaches the caller.
//!
//! ```
//! use reclaim_registry::{check_add, throw_release, Registry, Release};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! fn load(closed: Rc<Cell<bool>>) -> reclaim_core::Result<()> {
//!     let mut registry = Registry::fixed(4)?;
//!     let buffer = Rc::new(vec![0i64; 6]);
//!     check_add!(&mut registry, buffer);
//!     let flag = Rc::clone(&closed);
//!     check_add!(&mut registry, Rc::new(vec![0i64]), Release::with(move |_| flag.set(true)));
//!     throw_release!(&mut registry, "could not read numbers");
//! }
//!
//! let closed = Rc::new(Cell::new(false));
//! assert!(load(Rc::clone(&closed)).is_err());
//! assert!(closed.get());
//! ```
//!
//! ## Layout
//!
//! - [`handle`] - address identity of tracked resources
//! - [`release`] - release actions and the drop fallback
//! - [`entry`] - a registered (handle, action) pair
//! - [`config`] - capacity policy and registry configuration
//! - [`registry`] - the registry itself
//! - [`protocol`] - `attempt`, `attempt_with_release`, `checked_add`
//! - [`macros`](crate::throw) - `throw!`, `throw_release!`, `check!`,
//!   `check_release!`, `check_add!`

pub mod config;
pub mod entry;
pub mod handle;
mod macros;
pub mod protocol;
pub mod registry;
pub mod release;

#[cfg(test)]
mod tests_proptest;

pub use config::{CapacityPolicy, RegistryConfig};
pub use entry::Entry;
pub use handle::{Handle, HandleId};
pub use protocol::{attempt, attempt_with_release, checked_add, Attempt};
pub use registry::{AnyHandle, Registry, Rejected};
pub use release::{dealloc, Release, ReleaseAction};
