use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::error::{CommitGuardError, report_handled};

use super::{
    ColorMode, Diagnostic, DiagnosticFormatter, OutputMode, PlainFormatter, Severity,
    StructuredFormatter,
};

type Sink = Box<dyn Write + Send>;

/// Renders diagnostics in the configured mode and writes them to a sink.
///
/// A failed write is logged and otherwise ignored; reporting never aborts a
/// validation run.
pub struct Reporter {
    formatter: Box<dyn DiagnosticFormatter + Send>,
    sink: Sink,
    errors: usize,
    warnings: usize,
    infos: usize,
}

impl Reporter {
    #[must_use]
    pub fn new(mode: OutputMode, color: ColorMode, sink: Sink) -> Self {
        let formatter: Box<dyn DiagnosticFormatter + Send> = match mode {
            OutputMode::Plain => Box::new(PlainFormatter::new(color)),
            OutputMode::Structured => Box::new(StructuredFormatter),
        };
        Self {
            formatter,
            sink,
            errors: 0,
            warnings: 0,
            infos: 0,
        }
    }

    #[must_use]
    pub fn stdout(mode: OutputMode, color: ColorMode) -> Self {
        Self::new(mode, color, Box::new(io::stdout()))
    }

    /// Send subsequent diagnostics to `sink`, returning the previous one.
    pub fn redirect(&mut self, sink: Sink) -> Sink {
        self.flush();
        std::mem::replace(&mut self.sink, sink)
    }

    pub fn emit(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Info => self.infos += 1,
        }

        let rendered = match self.formatter.format(diagnostic) {
            Ok(rendered) => rendered,
            Err(err) => {
                report_handled(&err);
                return;
            }
        };
        if let Err(err) = writeln!(self.sink, "{rendered}") {
            report_handled(&CommitGuardError::Io(err));
        }
    }

    pub fn flush(&mut self) {
        if let Err(err) = self.sink.flush() {
            report_handled(&CommitGuardError::Io(err));
        }
    }

    #[must_use]
    pub const fn emitted(&self) -> usize {
        self.errors + self.warnings + self.infos
    }

    #[must_use]
    pub const fn errors(&self) -> usize {
        self.errors
    }

    #[must_use]
    pub const fn warnings(&self) -> usize {
        self.warnings
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        let _ = self.sink.flush();
    }
}

/// Cloneable in-memory sink; every clone sees the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .buffer
            .lock()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
