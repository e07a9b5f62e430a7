use std::fmt;

pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_sink;
pub mod memory_log_sink;
pub mod noop_log_sink;
pub mod sink_error;
pub mod stderr_log_sink;

#[cfg(target_os = "android")]
pub mod android_log_sink;

#[cfg(target_os = "android")]
pub use android_log_sink::AndroidLogSink;
pub use log_level::{LogLevel, LogThreshold, passes};
pub use log_msg::{LOG_PRIORITY, LOG_TAG, LogMsg, LogPriority};
pub use log_sink::LogSink;
pub use memory_log_sink::{CapturedLog, MemoryLogSink};
pub use noop_log_sink::NoopLogSink;
pub use sink_error::SinkError;
pub use stderr_log_sink::StderrLogSink;

// -----------------------------------------------------------------------------
// COMPILE-TIME CONFIGURATION
// -----------------------------------------------------------------------------

/// Compiled threshold: everything up to `Verbose` is kept.
#[cfg(feature = "log-verbose")]
pub const LOG_LEVEL: LogThreshold = LogThreshold::Verbose;

/// Compiled threshold: `Error`, `Minimal` and `Warning` are kept.
#[cfg(all(feature = "log-warning", not(feature = "log-verbose")))]
pub const LOG_LEVEL: LogThreshold = LogThreshold::Warning;

/// Compiled threshold: `Error` and `Minimal` are kept.
#[cfg(all(feature = "log-minimal", not(feature = "log-warning")))]
pub const LOG_LEVEL: LogThreshold = LogThreshold::Minimal;

/// Compiled threshold: only `Error` is kept.
#[cfg(all(feature = "log-error", not(feature = "log-minimal")))]
pub const LOG_LEVEL: LogThreshold = LogThreshold::Error;

/// Compiled threshold: nothing is kept and every log macro expands to `()`.
#[cfg(not(feature = "log-error"))]
pub const LOG_LEVEL: LogThreshold = LogThreshold::None;

// -----------------------------------------------------------------------------

/// The host's system log.
#[cfg(target_os = "android")]
pub type PlatformLogSink = AndroidLogSink;

/// The host's system log.
#[cfg(not(target_os = "android"))]
pub type PlatformLogSink = StderrLogSink;

/// Forwards one message to `sink` if `level` passes [`LOG_LEVEL`].
///
/// This is what the log macros expand to. Call it directly only when the
/// level is not known until runtime (e.g. it came from native code).
#[inline]
pub fn emit_to<S: LogSink + ?Sized>(sink: &S, level: LogLevel, args: fmt::Arguments<'_>) {
    if passes(level, LOG_LEVEL) {
        sink.log(&LogMsg::new(level, args));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_threshold_follows_features() {
        let expected = if cfg!(feature = "log-verbose") {
            LogThreshold::Verbose
        } else if cfg!(feature = "log-warning") {
            LogThreshold::Warning
        } else if cfg!(feature = "log-minimal") {
            LogThreshold::Minimal
        } else if cfg!(feature = "log-error") {
            LogThreshold::Error
        } else {
            LogThreshold::None
        };
        assert_eq!(LOG_LEVEL, expected);
    }

    #[test]
    fn emit_to_accepts_trait_objects() {
        let sink: &dyn LogSink = &NoopLogSink;
        emit_to(sink, LogLevel::Error, format_args!("ignored"));
    }
}
