//! Diagnostic output gated by the `debug-output` cargo feature.
//! Call sites use `debug_stream!` unconditionally; silent builds keep the
//! exact same syntax and emit nothing.

#[macro_use]
pub mod debug; // gated stderr sink with `<file>(<line>): ` prefixes

pub use debug::{is_enabled, location_prefix, DebugSink};
