use super::*;

fn plain_reporter(sink: &MemorySink) -> Reporter {
    Reporter::new(OutputMode::Plain, ColorMode::Never, Box::new(sink.clone()))
}

#[test]
fn emit_writes_one_line_per_diagnostic() {
    let sink = MemorySink::new();
    let mut reporter = plain_reporter(&sink);

    reporter.emit(&Diagnostic::error("a", "first"));
    reporter.emit(&Diagnostic::new("b", Severity::Warning, "second"));

    assert_eq!(
        sink.lines(),
        vec!["error: [a] first", "warning: [b] second"]
    );
    assert_eq!(reporter.emitted(), 2);
    assert_eq!(reporter.errors(), 1);
    assert_eq!(reporter.warnings(), 1);
}

#[test]
fn structured_mode_writes_json_lines() {
    let sink = MemorySink::new();
    let mut reporter = Reporter::new(
        OutputMode::Structured,
        ColorMode::Always,
        Box::new(sink.clone()),
    );

    reporter.emit(&Diagnostic::error("compile", "boom"));

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let parsed: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(parsed["tool"], "compile");
}

#[test]
fn redirect_switches_sink() {
    let first = MemorySink::new();
    let second = MemorySink::new();
    let mut reporter = plain_reporter(&first);

    reporter.emit(&Diagnostic::error("a", "before"));
    let _previous = reporter.redirect(Box::new(second.clone()));
    reporter.emit(&Diagnostic::error("a", "after"));

    assert_eq!(first.lines(), vec!["error: [a] before"]);
    assert_eq!(second.lines(), vec!["error: [a] after"]);
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_does_not_panic_and_still_counts() {
    let mut reporter = Reporter::new(OutputMode::Plain, ColorMode::Never, Box::new(BrokenSink));
    reporter.emit(&Diagnostic::error("a", "lost"));
    assert_eq!(reporter.errors(), 1);
}
