use std::ffi::CStr;

use crate::log::{log_level::LogLevel, log_msg::LogMsg};

/// Destination for messages that passed the compiled threshold.
///
/// Implementations must never panic and never report failure to the caller;
/// logging is best-effort.
pub trait LogSink: Send + Sync {
    fn log(&self, msg: &LogMsg<'_>);

    /// Logs text that native code already formatted and NUL-terminated.
    ///
    /// The default renders it lossily through [`log`](Self::log). Sinks that
    /// can take the bytes as they are should override this.
    fn log_c_str(&self, level: LogLevel, text: &CStr) {
        self.log(&LogMsg::new(level, format_args!("{}", text.to_string_lossy())));
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    #[inline]
    fn log(&self, msg: &LogMsg<'_>) {
        (**self).log(msg);
    }

    #[inline]
    fn log_c_str(&self, level: LogLevel, text: &CStr) {
        (**self).log_c_str(level, text);
    }
}
