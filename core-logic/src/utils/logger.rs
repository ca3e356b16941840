use chrono::Local;
use nu_ansi_term::{Color, Style};
use std::fmt;
use tracing::{Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
    prelude::*,
    registry::LookupSpan,
    Layer,
};

/// Target for the one-line outcome of each activity call.
pub const TASK_RESULT_TARGET: &str = "task_result";
/// Target for progress lines ("Starting swap for 0x..").
pub const ACTIVITY_TARGET: &str = "activity";

pub fn setup_logger() -> Option<WorkerGuard> {
    std::fs::create_dir_all("logs").ok();

    let file_appender = tracing_appender::rolling::hourly("logs", "bera");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // File keeps everything the console shows plus debug detail from our own targets
    let file_filter = tracing_subscriber::filter::Targets::new()
        .with_target(TASK_RESULT_TARGET, tracing::Level::INFO)
        .with_target(ACTIVITY_TARGET, tracing::Level::DEBUG)
        .with_default(tracing::Level::WARN);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(FileFormatter)
        .with_filter(file_filter);

    let console_filter = tracing_subscriber::filter::Targets::new()
        .with_target(TASK_RESULT_TARGET, tracing::Level::INFO)
        .with_target(ACTIVITY_TARGET, tracing::Level::INFO)
        .with_default(tracing::Level::WARN);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .event_format(TerminalFormatter)
        .with_filter(console_filter);

    // A second call (tests, debug binaries) must not panic
    if tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    // Return guard - MUST be kept alive by caller
    Some(guard)
}

// --- Formatters ---

struct MessageVisitor {
    message: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Colours the status words the runner emits.
pub fn colorize_status(msg: &str) -> String {
    if msg.contains("Success") {
        let green_text = Style::new().fg(Color::LightGreen).bold();
        msg.replace("Success", &format!("{}", green_text.paint("Success")))
    } else if msg.contains("Already") {
        let yellow_text = Style::new().fg(Color::LightYellow).bold();
        msg.replace("Already", &format!("{}", yellow_text.paint("Already")))
    } else if msg.contains("Failed") {
        let red_text = Style::new().fg(Color::LightRed).bold();
        msg.replace("Failed", &format!("{}", red_text.paint("Failed")))
    } else {
        msg.to_string()
    }
}

pub struct TerminalFormatter;

impl<S, N> FormatEvent<S, N> for TerminalFormatter
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
        let mut msg_visitor = MessageVisitor {
            message: String::new(),
        };
        event.record(&mut msg_visitor);

        let time = Local::now().format("%H:%M:%S");
        let level = *event.metadata().level();
        let level_str = match level {
            tracing::Level::ERROR => Color::Red.paint("ERROR"),
            tracing::Level::WARN => Color::Yellow.paint("WARN "),
            tracing::Level::INFO => Color::White.paint("INFO "),
            _ => Color::DarkGray.paint("DEBUG"),
        };

        write!(
            writer,
            "{} | {} | {}",
            Color::DarkGray.paint(time.to_string()),
            level_str,
            colorize_status(&msg_visitor.message)
        )?;
        writeln!(writer)
    }
}

pub struct FileFormatter;

impl<S, N> FormatEvent<S, N> for FileFormatter
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
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let level = event.metadata().level();

        write!(writer, "{} [{}] ", timestamp, level)?;

        let mut msg_visitor = MessageVisitor {
            message: String::new(),
        };
        event.record(&mut msg_visitor);
        writeln!(writer, "{}", msg_visitor.message)
    }
}
