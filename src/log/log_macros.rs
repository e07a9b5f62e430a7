//! Leveled logging macros for the plugin.
//!
//! # Feature Flags
//! The compiled threshold is chosen with cargo features:
//! `log-error`, `log-minimal`, `log-warning`, `log-verbose` (each implies the
//! ones before it). With none of them enabled every macro here expands to `()`,
//! so neither the sink nor any format argument is evaluated.
//!
//! # Usage
//! ```rust,ignore
//! gln64::log_warning!("unknown GBI command {:#04x}", cmd);
//! gln64::gln_log!(LogLevel::Verbose, "tile {} -> tmem {}", tile, addr);
//! gln64::sink_error!(&my_sink, "framebuffer incomplete: {status}");
//! ```

// ============================================================================
// 1. GENERIC MACROS (runtime level)
// ============================================================================

/// Sends a message at `$lvl` to `$sink` if it passes the compiled threshold.
///
/// The sink expression and the format arguments are only evaluated when the
/// message is kept.
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! sink_log {
    ($sink:expr, $lvl:expr, $($arg:tt)*) => {{
        let __lvl: $crate::log::LogLevel = $lvl;
        if $crate::log::passes(__lvl, $crate::log::LOG_LEVEL) {
            $crate::log::LogSink::log(
                &$sink,
                &$crate::log::LogMsg::new(__lvl, ::core::format_args!($($arg)*)),
            );
        }
    }};
}

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! sink_log {
    ($($arg:tt)*) => {
        ()
    };
}

/// Sends a message at `$lvl` to the platform log.
#[macro_export]
macro_rules! gln_log {
    ($lvl:expr, $($arg:tt)*) => {
        $crate::sink_log!($crate::log::PlatformLogSink::new(), $lvl, $($arg)*)
    };
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! sink_error { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::LogLevel::Error, $($arg)*) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error  { ($($arg:tt)*) => { $crate::gln_log!($crate::log::LogLevel::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! sink_error {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- MINIMAL ----------------------
#[cfg(feature = "log-minimal")]
#[macro_export]
macro_rules! sink_minimal { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::LogLevel::Minimal, $($arg)*) } }
#[cfg(feature = "log-minimal")]
#[macro_export]
macro_rules! log_minimal  { ($($arg:tt)*) => { $crate::gln_log!($crate::log::LogLevel::Minimal, $($arg)*) } }

#[cfg(not(feature = "log-minimal"))]
#[macro_export]
macro_rules! sink_minimal {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-minimal"))]
#[macro_export]
macro_rules! log_minimal {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARNING ----------------------
#[cfg(feature = "log-warning")]
#[macro_export]
macro_rules! sink_warning { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::LogLevel::Warning, $($arg)*) } }
#[cfg(feature = "log-warning")]
#[macro_export]
macro_rules! log_warning  { ($($arg:tt)*) => { $crate::gln_log!($crate::log::LogLevel::Warning, $($arg)*) } }

#[cfg(not(feature = "log-warning"))]
#[macro_export]
macro_rules! sink_warning {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warning"))]
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- VERBOSE ----------------------
// Off by default: these sit on the per-command path.
#[cfg(feature = "log-verbose")]
#[macro_export]
macro_rules! sink_verbose { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::LogLevel::Verbose, $($arg)*) } }
#[cfg(feature = "log-verbose")]
#[macro_export]
macro_rules! log_verbose  { ($($arg:tt)*) => { $crate::gln_log!($crate::log::LogLevel::Verbose, $($arg)*) } }

#[cfg(not(feature = "log-verbose"))]
#[macro_export]
macro_rules! sink_verbose {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-verbose"))]
#[macro_export]
macro_rules! log_verbose {
    ($($arg:tt)*) => {
        ()
    };
}
