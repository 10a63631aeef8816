use super::*;
use std::error::Error as _;

#[test]
fn operation_records_caller_location() {
    let line = line!() + 1;
    let err = Error::operation("something happened");
    let location = err.location().unwrap();
    assert!(location.contains(file!()));
    assert!(location.ends_with(&format!("Line: {line}")));
    assert!(err.is_operation());
}

#[test]
fn capacity_exceeded_display() {
    let err = Error::capacity_exceeded(6);
    assert!(err.is_capacity_exceeded());
    assert_eq!(
        err.to_string(),
        "registry full, cannot add more than 6 handles"
    );
}

#[test]
fn allocation_error_keeps_source() {
    let source = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
    let err = Error::allocation(usize::MAX, source);
    assert!(err.is_allocation());
    assert!(err.source().is_some());
}

#[test]
fn context_wraps_underlying_error() {
    let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "missing",
    ));
    let err = io.context("could not open numbers").unwrap_err();
    assert!(err.is_operation());
    assert!(err.to_string().contains("could not open numbers"));
    assert!(err.source().is_some());
}

#[test]
fn with_context_is_lazy() {
    let ok: std::result::Result<u8, Error> = Ok(1);
    let value = ok
        .with_context(|| panic!("context closure must not run on success"))
        .unwrap();
    assert_eq!(value, 1);
}

#[test]
fn parse_error_reads_like_a_sentence() {
    let err = Error::parse("abc", "is not a number");
    assert_eq!(err.to_string(), "abc is not a number");
}

#[test]
fn anyhow_errors_become_located_operations() {
    let err: Error = anyhow::anyhow!("disk on fire").into();
    assert!(err.is_operation());
    assert_eq!(err.source().unwrap().to_string(), "disk on fire");
}

#[test]
fn message_leaves_out_the_location() {
    let err = Error::operation("two is not a number");
    assert_eq!(err.message(), "two is not a number");
    assert!(err.to_string().starts_with("File: "));

    let err = Error::parse("two", "is not a number");
    assert_eq!(err.message(), "two is not a number");
}
