//! C entry points so the plugin's native translation units log through the
//! same compiled threshold and sink as the Rust side.

use std::ffi::{CStr, c_char, c_int};

use crate::log::{LOG_LEVEL, LogLevel, LogSink, PlatformLogSink};

/// Logs a pre-formatted, NUL-terminated message at `level` (1..=4).
///
/// The bytes reach the sink unconverted; they need not be UTF-8.
///
/// A null `msg`, a level of `0` or a level above `4` is a caller error and the
/// message is dropped.
///
/// # Safety
///
/// `msg` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gln64_log(level: c_int, msg: *const c_char) {
    // SAFETY: forwarded caller contract.
    unsafe { forward(&PlatformLogSink::new(), level, msg) }
}

/// Returns the compiled threshold (0 = nothing is logged, 4 = everything).
#[unsafe(no_mangle)]
pub extern "C" fn gln64_log_threshold() -> c_int {
    c_int::from(LOG_LEVEL.as_u8())
}

fn level_from_raw(level: c_int) -> Option<LogLevel> {
    u8::try_from(level).ok().and_then(LogLevel::from_u8)
}

/// # Safety
///
/// Same contract as [`gln64_log`].
unsafe fn forward<S: LogSink + ?Sized>(sink: &S, level: c_int, msg: *const c_char) {
    let Some(level) = level_from_raw(level) else {
        return;
    };
    if msg.is_null() || !LOG_LEVEL.allows(level) {
        return;
    }
    // SAFETY: non-null, and the caller guarantees NUL termination and lifetime.
    let text = unsafe { CStr::from_ptr(msg) };
    sink.log_c_str(level, text);
}
