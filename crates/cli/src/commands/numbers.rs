//! Read a file of non-zero integers, one per line.
//!
//! The number buffer and the open file are both tracked by one registry, so a
//! bad line anywhere in the file releases both before the failure surfaces.

use reclaim_core::{Error, Result};
use reclaim_registry::{
    check_add, check_release, throw_release, AnyHandle, HandleId, Registry, RegistryConfig,
    Release,
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Default number of slots in the number buffer
pub const DEFAULT_SLOTS: usize = 6;

type Reader = BufReader<File>;

/// Parse every line of `path` into the buffer.
///
/// Fails when the file cannot be opened, a line is not a non-zero integer, or
/// the file holds more than `slots` numbers.
pub fn read_numbers(path: &Path, slots: usize, config: &RegistryConfig) -> Result<Vec<i64>> {
    let mut registry: Registry = Registry::from_config(config)?;

    let mut numbers: Vec<i64> = Vec::new();
    if numbers.try_reserve_exact(slots).is_err() {
        throw_release!(&mut registry, "Could not allocate memory for numbers");
    }
    let numbers = check_add!(&mut registry, Box::new(numbers));

    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => throw_release!(&mut registry, "Could not open file {}", path.display()),
    };
    let file = check_add!(
        &mut registry,
        Box::new(BufReader::new(file)),
        close_file(path.to_path_buf())
    );

    let mut line = String::new();
    loop {
        let read = check_release!(
            &mut registry,
            next_line(&mut registry, file, path, &mut line)
        );
        if read == 0 {
            break;
        }

        let text = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let value = check_release!(&mut registry, parse_number(text));
        check_release!(&mut registry, store(&mut registry, numbers, value, slots));
    }

    // take the buffer back before the file is closed
    let parsed = registry
        .remove(numbers, false)
        .and_then(|handle| handle.downcast::<Vec<i64>>().ok())
        .map(|boxed| *boxed);
    registry.release_all();

    parsed.ok_or_else(|| Error::operation("number buffer went missing"))
}

fn close_file(path: PathBuf) -> Release<AnyHandle> {
    Release::with(move |reader| {
        drop(reader);
        tracing::debug!(path = %path.display(), "closed numbers file");
    })
}

fn next_line(
    registry: &mut Registry,
    file: HandleId,
    path: &Path,
    line: &mut String,
) -> Result<usize> {
    let reader = registry
        .get_mut(file)
        .and_then(|handle| handle.downcast_mut::<Reader>())
        .ok_or_else(|| Error::operation("numbers file is not registered"))?;

    line.clear();
    reader
        .read_line(line)
        .map_err(|e| Error::file_system(path, "read", e))
}

/// Only non-zero integers count as numbers
fn parse_number(text: &str) -> Result<i64> {
    match text.trim().parse::<i64>() {
        Ok(value) if value != 0 => Ok(value),
        _ => Err(Error::parse(text, "is not a number")),
    }
}

fn store(registry: &mut Registry, numbers: HandleId, value: i64, slots: usize) -> Result<()> {
    let buffer = registry
        .get_mut(numbers)
        .and_then(|handle| handle.downcast_mut::<Vec<i64>>())
        .ok_or_else(|| Error::operation("number buffer is not registered"))?;

    if buffer.len() >= slots {
        return Err(Error::operation(format!(
            "more than {slots} numbers, buffer is full"
        )));
    }
    buffer.push(value);
    Ok(())
}

/// Entry point for `reclaim numbers`
pub fn execute(path: &Path, slots: usize, config: &RegistryConfig) -> Result<()> {
    let numbers = read_numbers(path, slots, config)?;
    for number in numbers {
        println!("{number}");
    }
    Ok(())
}
