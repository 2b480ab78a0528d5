//! Handles all user-facing output for the harness.
//!
//! The runner and reporter write through a [`ReportSink`] so that tests can
//! capture the report verbatim while the CLI colorizes it. There is exactly
//! one logical writer per run, so no locking is needed.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// How a report line should be rendered by sinks that support color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// A passing case.
    Good,
    /// A failing case.
    Bad,
}

/// Destination for per-case lines and the summary table.
pub trait ReportSink {
    fn emit(&mut self, text: &str, tone: Tone);
}

/// Collects report lines into a string, for tests and programmatic capture.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl ReportSink for OutputBuffer {
    fn emit(&mut self, text: &str, _tone: Tone) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }
}

/// Writes the report to stdout, coloring pass/fail lines when attached to a
/// terminal.
pub struct StdoutSink {
    stream: StandardStream,
}

impl StdoutSink {
    pub fn new() -> Self {
        let choice = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stream: StandardStream::stdout(choice),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for StdoutSink {
    fn emit(&mut self, text: &str, tone: Tone) {
        use std::io::Write;

        let color = match tone {
            Tone::Plain => None,
            Tone::Good => Some(Color::Green),
            Tone::Bad => Some(Color::Red),
        };
        if let Some(color) = color {
            let _ = self.stream.set_color(ColorSpec::new().set_fg(Some(color)));
        }
        let _ = writeln!(self.stream, "{}", text);
        let _ = self.stream.reset();
    }
}
