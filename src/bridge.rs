//! Routes records from the `log` facade (used by our Rust dependencies) into
//! the plugin's own filter and sink.

use std::sync::Once;

use ::log::{Level, LevelFilter, Log, Metadata, Record};

use crate::log::{LOG_LEVEL, LogLevel, LogSink, LogThreshold, PlatformLogSink, emit_to, passes};

/// `log::Log` adapter over any [`LogSink`].
#[derive(Debug, Default)]
pub struct LogBridge<S> {
    sink: S,
}

impl<S: LogSink> LogBridge<S> {
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: LogSink> Log for LogBridge<S> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        passes(level_for(metadata.level()), LOG_LEVEL)
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        emit_to(
            &self.sink,
            level_for(record.level()),
            format_args!("[{}] {}", record.target(), record.args()),
        );
    }

    fn flush(&self) {}
}

/// Facade level to plugin level. Order-preserving, so a facade max level
/// can express every compiled threshold.
#[must_use]
pub const fn level_for(level: Level) -> LogLevel {
    match level {
        Level::Error => LogLevel::Error,
        Level::Warn => LogLevel::Warning,
        Level::Info | Level::Debug | Level::Trace => LogLevel::Verbose,
    }
}

/// Most verbose facade level that [`level_for`] maps under `threshold`.
#[must_use]
pub const fn level_filter_for(threshold: LogThreshold) -> LevelFilter {
    match threshold {
        LogThreshold::None => LevelFilter::Off,
        LogThreshold::Error | LogThreshold::Minimal => LevelFilter::Error,
        LogThreshold::Warning => LevelFilter::Warn,
        LogThreshold::Verbose => LevelFilter::Trace,
    }
}

static BRIDGE: LogBridge<PlatformLogSink> = LogBridge::new(PlatformLogSink::new());

/// Installs the bridge as the global `log` logger.
///
/// Safe to call on every plugin start-up; only the first call does anything.
/// If the host process already installed a logger, that one is kept.
pub fn init() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        if ::log::set_logger(&BRIDGE).is_ok() {
            ::log::set_max_level(level_filter_for(LOG_LEVEL));
        }
    });
}
