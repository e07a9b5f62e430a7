use std::{cmp::Ordering, fmt};

/// Severity of a diagnostic message, as chosen at the call site.
///
/// Higher values are more verbose: a build that keeps `Warning` also keeps
/// `Minimal` and `Error`. There is no "none" level here; see [`LogThreshold`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Something failed and the frame (or the plugin) may be broken.
    Error = 1,
    /// Coarse progress: plugin start/stop, context creation, ROM changes.
    Minimal = 2,
    /// Unexpected but recoverable situations, e.g. unknown GBI commands.
    Warning = 3,
    /// Per-command and per-frame detail.
    Verbose = 4,
}

impl LogLevel {
    /// All call-site levels, least verbose first.
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Error,
        LogLevel::Minimal,
        LogLevel::Warning,
        LogLevel::Verbose,
    ];

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Maps the numeric rank used by native code back to a level.
    ///
    /// `0` (none) and anything above `4` have no call-site meaning and yield `None`.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(LogLevel::Error),
            2 => Some(LogLevel::Minimal),
            3 => Some(LogLevel::Warning),
            4 => Some(LogLevel::Verbose),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Minimal => "MINIMAL",
            LogLevel::Warning => "WARNING",
            LogLevel::Verbose => "VERBOSE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Most verbose level that still produces output.
///
/// Only ever built from Cargo features (see [`LOG_LEVEL`](super::LOG_LEVEL)).
/// `None` silences everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogThreshold {
    None = 0,
    Error = 1,
    Minimal = 2,
    Warning = 3,
    Verbose = 4,
}

impl LogThreshold {
    /// All thresholds, quietest first.
    pub const ALL: [LogThreshold; 5] = [
        LogThreshold::None,
        LogThreshold::Error,
        LogThreshold::Minimal,
        LogThreshold::Warning,
        LogThreshold::Verbose,
    ];

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether a message at `level` survives this threshold.
    #[inline]
    #[must_use]
    pub const fn allows(self, level: LogLevel) -> bool {
        passes(level, self)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LogThreshold::None => "NONE",
            LogThreshold::Error => "ERROR",
            LogThreshold::Minimal => "MINIMAL",
            LogThreshold::Warning => "WARNING",
            LogThreshold::Verbose => "VERBOSE",
        }
    }
}

impl fmt::Display for LogThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<LogThreshold> for LogLevel {
    fn eq(&self, other: &LogThreshold) -> bool {
        self.as_u8() == other.as_u8()
    }
}

impl PartialOrd<LogThreshold> for LogLevel {
    fn partial_cmp(&self, other: &LogThreshold) -> Option<Ordering> {
        Some(self.as_u8().cmp(&other.as_u8()))
    }
}

/// The filtering rule: a message is kept iff `level <= threshold`.
///
/// `const` so that call sites with a literal level fold to `true`/`false`.
#[inline]
#[must_use]
pub const fn passes(level: LogLevel, threshold: LogThreshold) -> bool {
    level.as_u8() <= threshold.as_u8()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_matches_numeric_ordering_for_every_pair() {
        for threshold in LogThreshold::ALL {
            for level in LogLevel::ALL {
                assert_eq!(
                    passes(level, threshold),
                    level.as_u8() <= threshold.as_u8(),
                    "{level} vs {threshold}"
                );
                assert_eq!(passes(level, threshold), level <= threshold);
            }
        }
    }

    #[test]
    fn none_threshold_rejects_everything() {
        for level in LogLevel::ALL {
            assert!(!LogThreshold::None.allows(level));
        }
    }

    #[test]
    fn verbose_threshold_accepts_everything() {
        for level in LogLevel::ALL {
            assert!(LogThreshold::Verbose.allows(level));
        }
    }

    #[test]
    fn warning_threshold_keeps_error_drops_verbose() {
        assert!(passes(LogLevel::Error, LogThreshold::Warning));
        assert!(passes(LogLevel::Warning, LogThreshold::Warning));
        assert!(!passes(LogLevel::Verbose, LogThreshold::Warning));
    }

    #[test]
    fn numeric_ranks_are_stable() {
        assert_eq!(LogThreshold::None.as_u8(), 0);
        assert_eq!(LogLevel::Error.as_u8(), 1);
        assert_eq!(LogLevel::Minimal.as_u8(), 2);
        assert_eq!(LogLevel::Warning.as_u8(), 3);
        assert_eq!(LogLevel::Verbose.as_u8(), 4);
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_u8(level.as_u8()), Some(level));
        }
    }

    #[test]
    fn zero_is_not_a_call_site_level() {
        assert_eq!(LogLevel::from_u8(0), None);
        assert_eq!(LogLevel::from_u8(5), None);
    }

    #[test]
    fn display_uses_upper_case_names() {
        assert_eq!(LogLevel::Minimal.to_string(), "MINIMAL");
        assert_eq!(LogThreshold::None.to_string(), "NONE");
    }
}
