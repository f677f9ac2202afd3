use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Prefixes every event with a colored level marker instead of the
/// default timestamp/target preamble.
pub struct GreeterFormatter;

fn level_marker(level: &Level) -> ColoredString {
    match *level {
        Level::TRACE => "( )".dimmed(),
        Level::DEBUG => "(?)".cyan(),
        Level::INFO => "(+)".green().bold(),
        Level::WARN => "(!)".yellow().bold(),
        Level::ERROR => "(x)".red().bold(),
    }
}

impl<S, N> FormatEvent<S, N> for GreeterFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", level_marker(event.metadata().level()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber. Filtering follows `RUST_LOG`,
/// defaulting to warnings so normal runs stay clean.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(GreeterFormatter)
        .with_writer(std::io::stderr)
        .init();
}
