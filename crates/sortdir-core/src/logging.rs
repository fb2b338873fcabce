//! Logging init: `TIMESTAMP [LEVEL] MESSAGE` lines to stderr or an append-mode log file.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Timestamp layout of every log line (local time, millisecond precision).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Event formatter producing `2024-03-11 09:15:02,417 [INFO] Moved: a.txt -> txt/a.txt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
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
        let now = chrono::Local::now();
        write!(
            writer,
            "{} [{}] ",
            now.format(TIMESTAMP_FORMAT),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Open `path` for appending, creating it and any missing parent directories.
fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log dir: {}", parent.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file: {}", path.display()))
}

/// `RUST_LOG` wins over the configured level.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the process-wide subscriber from the `[log]` config section.
///
/// Writes to `cfg.file` when set (parent directories are created), otherwise to stderr.
/// On failure (e.g. log file unwritable) returns Err so the caller can fall back to
/// [`init_logging_stderr`].
pub fn init_logging(cfg: &LogConfig) -> Result<()> {
    let writer = match &cfg.file {
        Some(path) => BoxMakeWriter::new(Mutex::new(open_log_file(path)?)),
        None => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&cfg.level))
        .with_writer(writer)
        .with_ansi(false)
        .event_format(LineFormat)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    if let Some(path) = &cfg.file {
        tracing::debug!("logging to {}", path.display());
    }
    Ok(())
}

/// Initialize logging to stderr only. Use when [`init_logging`] fails so the CLI doesn't crash.
pub fn init_logging_stderr(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(io::stderr)
        .with_ansi(false)
        .event_format(LineFormat)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_lines(emit: impl FnOnce()) -> String {
        let buf = Capture::default();
        let sink = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .event_format(LineFormat)
            .finish();
        tracing::subscriber::with_default(subscriber, emit);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn line_format_has_timestamp_level_message() {
        let out = capture_lines(|| tracing::info!("Moved: a.txt -> txt/a.txt"));
        let line = out.lines().next().unwrap();
        // "YYYY-MM-DD HH:MM:SS,mmm" is 23 chars.
        let (stamp, rest) = line.split_at(23);
        assert!(
            chrono::NaiveDateTime::parse_from_str(&stamp[..19], "%Y-%m-%d %H:%M:%S").is_ok(),
            "bad timestamp: {stamp}"
        );
        assert_eq!(&stamp[19..20], ",");
        assert!(stamp[20..].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(rest, " [INFO] Moved: a.txt -> txt/a.txt");
    }

    #[test]
    fn line_format_error_level() {
        let out = capture_lines(|| tracing::error!("Failed to move a.txt: boom"));
        assert!(out.trim_end().ends_with("[ERROR] Failed to move a.txt: boom"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn log_file_is_created_with_parents_and_appended() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("sortdir.log");
        open_log_file(&path).unwrap().write_all(b"one\n").unwrap();
        open_log_file(&path).unwrap().write_all(b"two\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn log_file_under_a_regular_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let err = open_log_file(&blocker.join("sortdir.log")).unwrap_err();
        assert!(format!("{err:#}").contains("create log dir"), "{err:#}");
    }
}
