use std::{
    ffi::{CStr, CString},
    fmt,
};

use crate::log::log_level::LogLevel;

/// Facility name every message is tagged with in the system log.
pub const LOG_TAG: &CStr = c"gln64";

/// Priority values understood by Android's `liblog` (`android_LogPriority`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum LogPriority {
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
}

impl LogPriority {
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Single-letter form used by `logcat` (`D/gln64: ...`).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            LogPriority::Verbose => 'V',
            LogPriority::Debug => 'D',
            LogPriority::Info => 'I',
            LogPriority::Warn => 'W',
            LogPriority::Error => 'E',
        }
    }
}

/// Sink priority for every message, whatever its [`LogLevel`].
pub const LOG_PRIORITY: LogPriority = LogPriority::Debug;

/// A single emission, alive only for the duration of the `LogSink::log` call.
///
/// The message text is kept as unformatted [`fmt::Arguments`]; sinks decide
/// when (and whether) to render it.
#[derive(Clone, Copy, Debug)]
pub struct LogMsg<'a> {
    /// Level chosen at the call site. Used for filtering only.
    pub level: LogLevel,
    pub tag: &'static CStr,
    pub priority: LogPriority,
    pub args: fmt::Arguments<'a>,
}

impl<'a> LogMsg<'a> {
    /// Builds a message with the plugin's fixed tag and priority.
    ///
    /// ```rust,ignore
    /// let msg = LogMsg::new(LogLevel::Warning, format_args!("unknown opcode {op:#04x}"));
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(level: LogLevel, args: fmt::Arguments<'a>) -> Self {
        Self {
            level,
            tag: LOG_TAG,
            priority: LOG_PRIORITY,
            args,
        }
    }

    /// Renders the text for a C consumer, cut at the first NUL byte.
    ///
    /// NUL-padded strings (ROM headers, fixed-size GL info buffers) keep
    /// everything before the padding instead of losing the whole line.
    #[must_use]
    pub fn to_c_string(&self) -> CString {
        let mut text = match self.args.as_str() {
            Some(s) => s.to_owned(),
            None => self.args.to_string(),
        };
        if let Some(end) = text.find('\0') {
            text.truncate(end);
        }
        CString::new(text).unwrap_or_default()
    }
}
