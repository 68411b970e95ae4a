//! `tracing` subscriber setup for the fleet binary.
//!
//! Audit events from [`crate::fleet`] print as
//! `[DD-MM-YYYY HH:MM:SS] Executing: <operation>`; every other event gets a
//! colored level symbol.

use colored::{ColoredString, Colorize};
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::fleet::AUDIT_TARGET;

pub struct AuditFormatter;

/// Collects the `operation` and `at` fields of an audit event.
#[derive(Default)]
struct AuditFields {
    operation: Option<String>,
    at: Option<String>,
}

impl Visit for AuditFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "operation" => self.operation = Some(value.to_string()),
            "at" => self.at = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "operation" => self.operation = Some(format!("{:?}", value).trim_matches('"').to_string()),
            "at" => self.at = Some(format!("{:?}", value)),
            _ => {}
        }
    }
}

fn level_symbol(level: &Level) -> ColoredString {
    match *level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::ERROR => "[-]".red().bold(),
    }
}

impl<S, N> FormatEvent<S, N> for AuditFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == AUDIT_TARGET {
            let mut fields = AuditFields::default();
            event.record(&mut fields);
            let at = fields.at.unwrap_or_default();
            let operation = fields.operation.unwrap_or_default();
            return writeln!(writer, "[{}] Executing: {}", at.dimmed(), operation);
        }

        write!(writer, "{} ", level_symbol(meta.level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Directive string for the filter: `RUST_LOG` when set, else the configured level.
pub fn filter_directive(configured_level: &str) -> String {
    std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| configured_level.to_lowercase())
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(configured_level: &str) {
    let filter = EnvFilter::try_new(filter_directive(configured_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(AuditFormatter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_falls_back_to_config() {
        if std::env::var(EnvFilter::DEFAULT_ENV).is_err() {
            assert_eq!(filter_directive("DEBUG"), "debug");
        }
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init("warn");
        init("info");
    }
}
