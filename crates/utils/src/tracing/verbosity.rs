//! Severity threshold for diagnostics.

use reclaim_core::Error;
use std::fmt;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// How much reaches the diagnostic sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verbosity {
    /// Nothing is written
    None = 0,
    /// Failures only
    Failure = 1,
    /// Failures and warnings
    #[default]
    Warning = 2,
    /// Failures, warnings and informational messages
    Info = 3,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::None => LevelFilter::OFF,
            Verbosity::Failure => LevelFilter::ERROR,
            Verbosity::Warning => LevelFilter::WARN,
            Verbosity::Info => LevelFilter::INFO,
        }
    }

    /// Filter directive understood by `EnvFilter`
    pub fn directive(self) -> &'static str {
        match self {
            Verbosity::None => "off",
            Verbosity::Failure => "error",
            Verbosity::Warning => "warn",
            Verbosity::Info => "info",
        }
    }

    /// True if an event at `level` passes this threshold
    pub fn allows(self, level: &tracing::Level) -> bool {
        self.level_filter() >= *level
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verbosity::None => "none",
            Verbosity::Failure => "failure",
            Verbosity::Warning => "warning",
            Verbosity::Info => "info",
        };
        f.write_str(name)
    }
}

/// Accepts names, their tracing equivalents and the numeric levels 0-3
impl FromStr for Verbosity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" | "0" => Ok(Verbosity::None),
            "failure" | "error" | "1" => Ok(Verbosity::Failure),
            "warning" | "warn" | "2" => Ok(Verbosity::Warning),
            "info" | "all" | "3" => Ok(Verbosity::Info),
            other => Err(Error::configuration(format!(
                "unknown verbosity '{other}', expected none, failure, warning or info"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tracing::Level;

    #[rstest]
    #[case("none", Verbosity::None)]
    #[case("0", Verbosity::None)]
    #[case("failure", Verbosity::Failure)]
    #[case("ERROR", Verbosity::Failure)]
    #[case("warning", Verbosity::Warning)]
    #[case("2", Verbosity::Warning)]
    #[case(" info ", Verbosity::Info)]
    #[case("all", Verbosity::Info)]
    fn parses(#[case] input: &str, #[case] expected: Verbosity) {
        assert_eq!(input.parse::<Verbosity>().unwrap(), expected);
    }

    #[rstest]
    #[case(Verbosity::None, Level::ERROR, false)]
    #[case(Verbosity::Failure, Level::ERROR, true)]
    #[case(Verbosity::Failure, Level::WARN, false)]
    #[case(Verbosity::Warning, Level::WARN, true)]
    #[case(Verbosity::Warning, Level::INFO, false)]
    #[case(Verbosity::Info, Level::INFO, true)]
    #[case(Verbosity::Info, Level::DEBUG, false)]
    fn gates_levels(#[case] verbosity: Verbosity, #[case] level: Level, #[case] allowed: bool) {
        assert_eq!(verbosity.allows(&level), allowed);
    }

    #[test]
    fn default_is_warning() {
        assert_eq!(Verbosity::default(), Verbosity::Warning);
        assert_eq!(Verbosity::default().to_string(), "warning");
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("loud".parse::<Verbosity>().is_err());
    }
}
