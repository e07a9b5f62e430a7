use std::ffi::{CStr, c_char, c_int};

use crate::log::{
    log_level::LogLevel,
    log_msg::{LOG_PRIORITY, LOG_TAG, LogMsg, LogPriority},
    log_sink::LogSink,
    sink_error::SinkError,
};

#[link(name = "log")]
unsafe extern "C" {
    fn __android_log_write(prio: c_int, tag: *const c_char, text: *const c_char) -> c_int;
}

/// Writes to `logcat` through `liblog`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidLogSink;

impl AndroidLogSink {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write(&self, priority: LogPriority, tag: &CStr, text: &CStr) -> Result<(), SinkError> {
        // SAFETY: tag and text are NUL-terminated and outlive the call.
        let rc = unsafe { __android_log_write(priority.as_raw(), tag.as_ptr(), text.as_ptr()) };
        if rc < 0 {
            return Err(SinkError::Rejected(rc));
        }
        Ok(())
    }
}

impl LogSink for AndroidLogSink {
    #[inline]
    fn log(&self, msg: &LogMsg<'_>) {
        let _ = self.write(msg.priority, msg.tag, &msg.to_c_string());
    }

    #[inline]
    fn log_c_str(&self, _level: LogLevel, text: &CStr) {
        let _ = self.write(LOG_PRIORITY, LOG_TAG, text);
    }
}
