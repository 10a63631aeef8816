//! Event formatter for the diagnostic sink.
//!
//! Each event becomes
//!
//! ```text
//! <location>, <Label>:
//! <message>
//! ```
//!
//! where the location is the event's own `location` field when it carries one
//! (failures raised through the propagation protocol do) and the event's
//! source file and line otherwise.

use reclaim_core::{FAILURE_LABEL, INFO_LABEL, WARNING_LABEL};
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Label printed for events at `level`
pub fn severity_label(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => FAILURE_LABEL,
        Level::WARN => WARNING_LABEL,
        _ => INFO_LABEL,
    }
}

/// Formats events as `<location>, <Label>:\n<message>`
///
/// Structured fields other than `location` are not rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticsFormat;

impl DiagnosticsFormat {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Default)]
struct DiagnosticVisitor {
    message: String,
    location: Option<String>,
}

impl Visit for DiagnosticVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "location" => self.location = Some(format!("{value:?}")),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "location" => self.location = Some(value.to_string()),
            _ => {}
        }
    }
}

impl<S, N> FormatEvent<S, N> for DiagnosticsFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        let mut visitor = DiagnosticVisitor::default();
        event.record(&mut visitor);

        let location = match visitor.location {
            Some(location) => location,
            None => match (metadata.file(), metadata.line()) {
                (Some(file), Some(line)) => format!("File: {file}, Line: {line}"),
                _ => format!("Target: {}", metadata.target()),
            },
        };

        writeln!(writer, "{location}, {}:", severity_label(metadata.level()))?;
        writeln!(writer, "{}", visitor.message)
    }
}
