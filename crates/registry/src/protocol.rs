//! Failure propagation around a registry.
//!
//! Every fallible call is wrapped by one of these combinators. A failure is
//! reported once, with the caller's source location, and may drain the
//! registry before it is handed back so that nothing acquired so far leaks.

use crate::handle::{Handle, HandleId};
use crate::registry::Registry;
use crate::release::Release;
use reclaim_core::{format_location, Error, Result};
use std::panic::Location;

/// Emit a failure diagnostic for `error` raised at `location`
pub fn report(location: &Location<'_>, error: &Error) {
    let location = error
        .location()
        .map(str::to_string)
        .unwrap_or_else(|| format_location(location));
    tracing::error!(location = %location, "{}", error.message());
}

/// Evaluate `operation`; on failure report it and hand the error back
#[track_caller]
pub fn attempt<T, E, F>(operation: F) -> Result<T>
where
    E: Into<Error>,
    F: FnOnce() -> std::result::Result<T, E>,
{
    let location = Location::caller();
    operation().map_err(|e| {
        let error = e.into();
        report(location, &error);
        error
    })
}

/// Like [`attempt`], but release everything in `registry` before failing
#[track_caller]
pub fn attempt_with_release<H, T, E, F>(registry: &mut Registry<H>, operation: F) -> Result<T>
where
    H: Handle,
    E: Into<Error>,
    F: FnOnce() -> std::result::Result<T, E>,
{
    let location = Location::caller();
    operation().map_err(|e| {
        let error = e.into();
        release_for_failure(registry);
        report(location, &error);
        error
    })
}

/// Register `handle`, rolling everything back when that fails.
///
/// On failure the pending handle is released with its own action first,
/// then every handle already in `registry`, and only then is the failure
/// returned.
#[track_caller]
pub fn checked_add<H: Handle>(
    registry: &mut Registry<H>,
    handle: H,
    release: Release<H>,
) -> Result<HandleId> {
    let location = Location::caller();
    registry.add(handle, release).map_err(|rejected| {
        let error = rejected.release();
        release_for_failure(registry);
        report(location, &error);
        error
    })
}

/// Build an operation failure at the caller and report it
#[track_caller]
pub fn raise(message: impl Into<String>) -> Error {
    let location = Location::caller();
    let error = Error::operation_at(location, message);
    report(location, &error);
    error
}

/// Drain `registry`, then build and report an operation failure
#[track_caller]
pub fn raise_with_release<H: Handle>(
    registry: &mut Registry<H>,
    message: impl Into<String>,
) -> Error {
    let location = Location::caller();
    release_for_failure(registry);
    let error = Error::operation_at(location, message);
    report(location, &error);
    error
}

fn release_for_failure<H: Handle>(registry: &mut Registry<H>) {
    let released = registry.drain();
    tracing::debug!(released, "released registry on failure");
}

/// Protocol combinators as methods on any `Result`
pub trait Attempt<T> {
    /// Report a failure at the caller and convert it into [`Error`]
    fn attempt(self) -> Result<T>;

    /// Drain `registry`, report and convert a failure
    fn attempt_with_release<H: Handle>(self, registry: &mut Registry<H>) -> Result<T>;
}

impl<T, E> Attempt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    #[track_caller]
    fn attempt(self) -> Result<T> {
        let location = Location::caller();
        self.map_err(|e| {
            let error = e.into();
            report(location, &error);
            error
        })
    }

    #[track_caller]
    fn attempt_with_release<H: Handle>(self, registry: &mut Registry<H>) -> Result<T> {
        let location = Location::caller();
        self.map_err(|e| {
            let error = e.into();
            release_for_failure(registry);
            report(location, &error);
            error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reclaim_utils::tracing::subscriber;
    use reclaim_utils::{DiagnosticsConfig, Verbosity};
    use std::cell::Cell;
    use std::io;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(emit: impl FnOnce()) -> String {
        let captured = Captured::default();
        let config = DiagnosticsConfig::new(Verbosity::Failure);
        tracing::subscriber::with_default(subscriber(&config, captured.clone()), emit);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn counting(count: &Rc<Cell<usize>>) -> Release<Rc<u32>> {
        let count = Rc::clone(count);
        Release::with(move |_| count.set(count.get() + 1))
    }

    fn failing() -> Result<u32> {
        Err(Error::parse("x", "is not a number"))
    }

    #[test]
    fn attempt_passes_success_through() {
        let value = attempt(|| Ok::<_, Error>(3)).unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn attempt_keeps_the_underlying_error() {
        let err = attempt(failing).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn attempt_with_release_drains_on_failure() {
        let count = Rc::new(Cell::new(0));
        let mut registry = Registry::fixed(4).unwrap();
        registry.add(Rc::new(1u32), counting(&count)).unwrap();
        registry.add(Rc::new(2u32), counting(&count)).unwrap();

        assert!(attempt_with_release(&mut registry, failing).is_err());
        assert_eq!(count.get(), 2);
        assert!(registry.is_empty());

        drop(registry);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn attempt_with_release_keeps_registry_on_success() {
        let count = Rc::new(Cell::new(0));
        let mut registry = Registry::fixed(1).unwrap();
        registry.add(Rc::new(1u32), counting(&count)).unwrap();

        let value = attempt_with_release(&mut registry, || Ok::<_, Error>("ok")).unwrap();
        assert_eq!(value, "ok");
        assert_eq!(registry.len(), 1);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn checked_add_rolls_everything_back() {
        let registered = Rc::new(Cell::new(0));
        let pending = Rc::new(Cell::new(0));
        let mut registry = Registry::fixed(2).unwrap();
        checked_add(&mut registry, Rc::new(1u32), counting(&registered)).unwrap();
        checked_add(&mut registry, Rc::new(2u32), counting(&registered)).unwrap();

        let err = checked_add(&mut registry, Rc::new(3u32), counting(&pending)).unwrap_err();
        assert!(err.is_capacity_exceeded());
        assert_eq!(pending.get(), 1);
        assert_eq!(registered.get(), 2);
        assert!(registry.is_empty());
    }

    #[test]
    fn raise_points_at_the_caller() {
        let line = line!() + 1;
        let err = raise("Something happened ??");
        assert!(err
            .location()
            .unwrap()
            .ends_with(&format!("Line: {line}")));
    }

    #[test]
    fn raised_failure_prints_location_once() {
        let line = line!() + 2;
        let output = capture(|| {
            let _ = raise("Something happened ??");
        });
        assert_eq!(
            output,
            format!(
                "File: {}, Line: {line}, Exception:\nSomething happened ??\n",
                file!()
            )
        );
    }

    #[test]
    fn reported_errors_without_location_use_the_caller() {
        let line = line!() + 2;
        let output = capture(|| {
            let _ = attempt(failing);
        });
        assert_eq!(
            output,
            format!(
                "File: {}, Line: {line}, Exception:\nx is not a number\n",
                file!()
            )
        );
    }

    #[test]
    fn result_extension_matches_free_functions() {
        let count = Rc::new(Cell::new(0));
        let mut registry = Registry::growable().unwrap();
        registry.add(Rc::new(1u32), counting(&count)).unwrap();

        let ok: Result<u8> = Ok(1);
        assert_eq!(ok.attempt_with_release(&mut registry).unwrap(), 1);
        assert_eq!(count.get(), 0);

        let err = failing().attempt_with_release(&mut registry).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert_eq!(count.get(), 1);
    }
}
