use std::{
    ffi::CStr,
    io::{self, Write},
};

use crate::log::{
    log_level::LogLevel,
    log_msg::{LOG_PRIORITY, LOG_TAG, LogMsg},
    log_sink::LogSink,
    sink_error::SinkError,
};

/// System-log stand-in for hosts without `liblog`.
///
/// Lines look like `logcat -v tag` output: `D/gln64: message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLogSink;

impl StderrLogSink {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders `msg` as one line into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Io`] if `out` fails.
    pub fn write_to<W: Write>(out: &mut W, msg: &LogMsg<'_>) -> Result<(), SinkError> {
        writeln!(
            out,
            "{}/{}: {}",
            msg.priority.as_char(),
            msg.tag.to_string_lossy(),
            msg.args
        )?;
        Ok(())
    }

    /// Writes native text into `out` byte for byte, with the fixed prefix.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Io`] if `out` fails.
    pub fn write_c_str_to<W: Write>(out: &mut W, text: &CStr) -> Result<(), SinkError> {
        let mut line = Vec::with_capacity(text.count_bytes() + 16);
        write!(line, "{}/{}: ", LOG_PRIORITY.as_char(), LOG_TAG.to_string_lossy())?;
        line.extend_from_slice(text.to_bytes());
        line.push(b'\n');
        out.write_all(&line)?;
        Ok(())
    }
}

impl LogSink for StderrLogSink {
    #[inline]
    fn log(&self, msg: &LogMsg<'_>) {
        // One locked write per line so concurrent callers do not interleave mid-line.
        let _ = Self::write_to(&mut io::stderr().lock(), msg);
    }

    #[inline]
    fn log_c_str(&self, _level: LogLevel, text: &CStr) {
        let _ = Self::write_c_str_to(&mut io::stderr().lock(), text);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn line_has_priority_tag_and_text() {
        let mut out = Vec::new();
        let cmd = 0xE7;
        StderrLogSink::write_to(
            &mut out,
            &LogMsg::new(LogLevel::Warning, format_args!("unknown command {cmd:#04x}")),
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "D/gln64: unknown command 0xe7\n");
    }

    #[test]
    fn write_failure_is_reported_to_caller_of_write_to() {
        let res = StderrLogSink::write_to(
            &mut BrokenPipe,
            &LogMsg::new(LogLevel::Error, format_args!("lost")),
        );
        assert!(matches!(res, Err(SinkError::Io(_))));
    }

    #[test]
    fn native_text_keeps_its_bytes() {
        // "マリオ" in Shift-JIS, as found in Japanese ROM headers.
        let raw: &[u8] = b"ROM \x83\x7d\x83\x8a\x83\x49\0";
        let text = CStr::from_bytes_with_nul(raw).unwrap();
        let mut out = Vec::new();
        StderrLogSink::write_c_str_to(&mut out, text).unwrap();

        let mut expected = b"D/gln64: ".to_vec();
        expected.extend_from_slice(&raw[..raw.len() - 1]);
        expected.push(b'\n');
        assert_eq!(out, expected);
    }

    #[test]
    fn log_never_panics() {
        StderrLogSink::new().log(&LogMsg::new(LogLevel::Minimal, format_args!("hello")));
    }
}
