//! Call-site macros over the propagation protocol.
//!
//! They only make sense inside functions returning a `Result` whose error
//! type converts from [`reclaim_core::Error`].

/// Report a failure here and return it.
///
/// ```
/// use reclaim_registry::throw;
///
/// fn parse(line: &str) -> reclaim_core::Result<i64> {
///     match line.trim().parse() {
///         Ok(value) => Ok(value),
///         Err(_) => throw!("{line} is not a number"),
///     }
/// }
///
/// assert!(parse("12").is_ok());
/// assert!(parse("twelve").is_err());
/// ```
#[macro_export]
macro_rules! throw {
    ($($arg:tt)+) => {
        return ::core::result::Result::Err(
            $crate::protocol::raise(::std::format!($($arg)+)).into(),
        )
    };
}

/// Release everything in the registry, report a failure here and return it
#[macro_export]
macro_rules! throw_release {
    ($registry:expr, $($arg:tt)+) => {
        return ::core::result::Result::Err(
            $crate::protocol::raise_with_release($registry, ::std::format!($($arg)+)).into(),
        )
    };
}

/// Unwrap a result or report and return its failure
#[macro_export]
macro_rules! check {
    ($expr:expr) => {
        $crate::protocol::Attempt::attempt($expr)?
    };
}

/// Unwrap a result or release the registry, report and return the failure
#[macro_export]
macro_rules! check_release {
    ($registry:expr, $expr:expr) => {
        $crate::protocol::Attempt::attempt_with_release($expr, $registry)?
    };
}

/// Register a handle or roll back the pending handle and the whole registry
#[macro_export]
macro_rules! check_add {
    ($registry:expr, $handle:expr) => {
        $crate::protocol::checked_add($registry, $handle, $crate::Release::dealloc())?
    };
    ($registry:expr, $handle:expr, $release:expr) => {
        $crate::protocol::checked_add($registry, $handle, $release)?
    };
}
