//! Canned registry scenarios.
//!
//! `notbuggy` should succeed, both buggy scenarios should fail. Each one
//! counts how many release actions ran so the summary can show that nothing
//! leaked on the way out.

use reclaim_core::{Error, Result};
use reclaim_registry::{check_add, throw_release, AnyHandle, Registry, Release};
use std::cell::Cell;
use std::rc::Rc;

/// Outcome of a single scenario run
#[derive(Debug)]
pub struct Report {
    pub name: &'static str,
    pub outcome: Result<()>,
    pub released: usize,
}

impl Report {
    /// Whether the scenario behaved the way it is meant to
    pub fn as_expected(&self) -> bool {
        self.outcome.is_ok() == !self.name.starts_with("buggy")
    }
}

#[derive(Clone, Default)]
struct Ledger(Rc<Cell<usize>>);

impl Ledger {
    fn count(&self) -> usize {
        self.0.get()
    }

    fn dealloc(&self) -> Release<AnyHandle> {
        let count = Rc::clone(&self.0);
        Release::with(move |handle| {
            drop(handle);
            count.set(count.get() + 1);
        })
    }

    fn complex_data_free(&self) -> Release<AnyHandle> {
        let count = Rc::clone(&self.0);
        Release::with(move |handle: AnyHandle| {
            if let Ok(data) = handle.downcast::<ComplexData>() {
                tracing::trace!(id = data.id, "freeing complex data");
            }
            count.set(count.get() + 1);
        })
    }
}

#[derive(Debug)]
struct ComplexData {
    id: usize,
    #[allow(dead_code)]
    payload: Vec<u8>,
}

fn notbuggy(ledger: &Ledger) -> Result<()> {
    let mut registry: Registry = Registry::fixed(8)?;
    check_add!(&mut registry, Box::new(vec![0i32; 10]), ledger.dealloc());

    tracing::info!("I am a function in a test!");
    tracing::warn!("Only allocated {} array!", 1);

    registry.release_all();
    Ok(())
}

fn buggy1(ledger: &Ledger) -> Result<()> {
    let mut registry: Registry = Registry::fixed(8)?;
    let arr1 = check_add!(&mut registry, Box::new(vec![0i32; 10]), ledger.dealloc());
    let arr2 = check_add!(&mut registry, Box::new(vec![0i64; 20]), ledger.dealloc());

    // reclaimed and freed by hand, then a fresh buffer takes its place
    drop(registry.remove(arr1, false));
    check_add!(&mut registry, Box::new(vec![0i32; 10]), ledger.dealloc());
    registry.remove(arr2, true);

    throw_release!(&mut registry, "Something happened ??");
}

fn buggy2(ledger: &Ledger) -> Result<()> {
    let mut registry: Registry = Registry::fixed(6)?;

    for id in 0..3 {
        let data = ComplexData {
            id,
            payload: vec![0; 32],
        };
        check_add!(&mut registry, Box::new(data), ledger.complex_data_free());
    }
    for size in [10usize, 20, 30] {
        check_add!(&mut registry, Box::new(vec![0u8; size]), ledger.dealloc());
    }

    // one past the fixed capacity
    check_add!(&mut registry, Box::new(vec![0u8; 40]), ledger.dealloc());

    registry.release_all();
    Ok(())
}

/// Run every scenario in order
pub fn run_all() -> Vec<Report> {
    let scenarios: [(&'static str, fn(&Ledger) -> Result<()>); 3] = [
        ("notbuggy", notbuggy),
        ("buggy1", buggy1),
        ("buggy2", buggy2),
    ];

    scenarios
        .into_iter()
        .map(|(name, scenario)| {
            let ledger = Ledger::default();
            let span = tracing::info_span!("scenario", name);
            let outcome = span.in_scope(|| scenario(&ledger));
            Report {
                name,
                outcome,
                released: ledger.count(),
            }
        })
        .collect()
}

/// Entry point for `reclaim scenarios`
pub fn execute() -> Result<()> {
    let reports = run_all();
    for report in &reports {
        let status = match &report.outcome {
            Ok(()) => "ok",
            Err(_) => "failed",
        };
        println!("{}: {status}, {} released", report.name, report.released);
    }

    let unexpected: Vec<_> = reports
        .iter()
        .filter(|report| !report.as_expected())
        .map(|report| report.name)
        .collect();
    if unexpected.is_empty() {
        Ok(())
    } else {
        Err(Error::operation(format!(
            "scenarios did not behave as expected: {}",
            unexpected.join(", ")
        )))
    }
}
