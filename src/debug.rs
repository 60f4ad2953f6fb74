//! Stderr diagnostics gated at build time by the `debug-output` feature.

use std::io::{self, Write};

/// True iff `debug-output` was compiled in. Fixed when the binary is produced.
pub const fn is_enabled() -> bool {
    cfg!(feature = "debug-output")
}

/// Renders the call-site prefix, `<file>(<line>): `. No trailing newline;
/// callers terminate their own lines.
pub fn location_prefix(file: &str, line: u32) -> String {
    format!("{file}({line}): ")
}

/// Write-only sink in one of two modes: prefixed (passes bytes through to a
/// writer after a one-time location prefix) or silent (accepts every write
/// and emits nothing, like `io::sink()`).
pub struct DebugSink<W: Write> {
    inner: Option<W>,
}

impl<W: Write> DebugSink<W> {
    /// Wraps `writer` and writes the location prefix to it immediately, so a
    /// bare construction still marks the call site. A failed prefix write is
    /// discarded; the construct itself never fails.
    pub fn prefixed(mut writer: W, file: &str, line: u32) -> Self {
        let _ = write!(writer, "{}", location_prefix(file, line));
        Self { inner: Some(writer) }
    }

    pub fn silent() -> Self {
        Self { inner: None }
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// Recovers the wrapped writer; `None` for silent sinks.
    pub fn into_inner(self) -> Option<W> {
        self.inner
    }
}

impl<W: Write> Write for DebugSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.inner.as_mut() {
            Some(w) => w.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.inner.as_mut() {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }
}

/// Prefixed stderr sink when `debug-output` is on, silent sink otherwise.
/// `cfg!` keeps both arms type-checked; the dead one is a constant-false
/// branch the optimizer drops.
pub fn stderr(file: &str, line: u32) -> DebugSink<io::Stderr> {
    if is_enabled() {
        DebugSink::prefixed(io::stderr(), file, line)
    } else {
        DebugSink::silent()
    }
}

/// The call-site construct. `debug_stream!()` is an expression: a sink for
/// chained `write!` appends, already prefixed with the current file and line.
/// `debug_stream!(fmt, args...)` performs a single prefixed write and
/// discards the result. Silent builds accept both forms unchanged; argument
/// expressions are still evaluated, only output is suppressed.
#[macro_export]
macro_rules! debug_stream {
    () => {
        $crate::debug::stderr(file!(), line!())
    };
    ($($arg:tt)*) => {{
        use ::std::io::Write as _;
        let mut sink = $crate::debug::stderr(file!(), line!());
        let _ = write!(sink, $($arg)*);
    }};
}
