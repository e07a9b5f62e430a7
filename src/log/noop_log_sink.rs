use crate::log::{log_msg::LogMsg, log_sink::LogSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn log(&self, _msg: &LogMsg<'_>) {}
}
