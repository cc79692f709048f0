use colored::Colorize;
use std::fmt;
use tracing::{Event, Subscriber};
use tracing_log::NormalizeEvent;
use tracing_subscriber::{
    fmt::{format, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

pub struct EventLoggerFormatter {
    pub quiet: bool,
}

impl<S, N> FormatEvent<S, N> for EventLoggerFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        if self.quiet {
            return Ok(());
        }

        // Records coming from the library go through `log`, their target is the label
        let normalized = event.normalized_metadata();
        let label = match normalized.as_ref() {
            Some(metadata) => metadata.target(),
            None if event.metadata().name().starts_with("event ") => "",
            None => event.metadata().name(),
        };

        if label == "SKIP_FORMAT" {
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            return writeln!(writer);
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string().dimmed();
        let level = *normalized
            .as_ref()
            .map(|metadata| metadata.level())
            .unwrap_or_else(|| event.metadata().level());

        let label = if label.is_empty() {
            String::new()
        } else {
            let label = label.to_ascii_lowercase();
            let label = if level == tracing::Level::ERROR {
                label.bold().red()
            } else if level == tracing::Level::WARN {
                label.bold().yellow()
            } else {
                label.bold().bright_yellow()
            };
            format!(" {}", label)
        };

        write!(writer, "{}{} ", timestamp, label)?;

        // Write fields on the event
        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

pub fn init_logging(quiet: bool) {
    let tracing_formatter =
        tracing_subscriber::fmt::layer().event_format(EventLoggerFormatter { quiet });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_formatter)
        .init();
}
