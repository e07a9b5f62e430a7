use core::fmt;
use std::io;

/// Why a sink could not deliver a message.
///
/// Never leaves the sink: `LogSink::log` swallows it.
#[derive(Debug)]
pub enum SinkError {
    Io(io::Error),
    /// The system log call returned this negative status.
    Rejected(i32),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Io(e) => write!(f, "IO error: {}", e),
            SinkError::Rejected(rc) => write!(f, "System log rejected message: {}", rc),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::Io(e) => Some(e),
            SinkError::Rejected(_) => None,
        }
    }
}

impl From<io::Error> for SinkError {
    fn from(e: io::Error) -> Self {
        SinkError::Io(e)
    }
}
