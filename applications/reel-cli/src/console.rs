//! Line-based console over any reader and writer
//!
//! Commands and selection answers are read from the same input.

use reel_engine::{parse_selection, Console};
use std::io::{self, BufRead, Write};

pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next input line without its line ending, or `None` at end of input
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Write the prompt without a newline
    pub fn prompt(&mut self, symbol: &str) -> io::Result<()> {
        write!(self.output, "{}", symbol)?;
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn report(&mut self, message: &str) {
        if let Err(err) = writeln!(self.output, "{}", message) {
            tracing::warn!("Failed to write output: {}", err);
        }
    }

    fn request_selection(&mut self, max: usize) -> Option<usize> {
        if let Err(err) = self.output.flush() {
            tracing::warn!("Failed to flush output: {}", err);
        }

        match self.read_line() {
            Ok(Some(answer)) => parse_selection(&answer, max),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!("Failed to read selection: {}", err);
                None
            }
        }
    }
}
