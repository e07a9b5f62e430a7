//! Diagnostic logging for the gln64 graphics plugin.
//!
//! Messages carry one of four levels (`Error` < `Minimal` < `Warning` <
//! `Verbose`). Which of them survive is decided when the plugin is built, via
//! the `log-*` cargo features; everything above the threshold is compiled out
//! of the call site. Surviving messages go to the system log (`logcat` on
//! Android) under the `gln64` tag.
//!
//! # Testing
//! Some tests only exist for one threshold. Run all three builds:
//!
//! ```text
//! cargo test                          # WARNING (default)
//! cargo test --no-default-features    # NONE
//! cargo test --features log-verbose   # VERBOSE
//! ```

/// C entry points for the plugin's native code.
pub mod ffi;
/// Logging levels, sinks and macros.
pub mod log;
/// Adapter for crates that log through the `log` facade.
pub mod bridge;
