//! Line-oriented prompt/answer I/O for interactive drills.
//!
//! Generic over `BufRead`/`Write` so sessions run against stdin/stdout in the
//! binary and against in-memory buffers in tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::trace;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("write output")?;
        Ok(())
    }

    /// Print `prompt` and read one answer line.
    ///
    /// Returns `None` once input is exhausted. The line terminator (`\n` or
    /// `\r\n`) is stripped; other whitespace is kept.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.say(prompt)?;
        self.output.flush().context("flush output")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("read input")?;
        if read == 0 {
            trace!(prompt, "input closed");
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        trace!(prompt, answer = %line, "answer read");
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_strips_line_endings_and_reports_eof() {
        let mut console = Console::new(Cursor::new("first\r\n second \nlast"), Vec::new());
        assert_eq!(console.ask("a?").expect("ask").as_deref(), Some("first"));
        assert_eq!(console.ask("b?").expect("ask").as_deref(), Some(" second "));
        assert_eq!(console.ask("c?").expect("ask").as_deref(), Some("last"));
        assert_eq!(console.ask("d?").expect("ask"), None);

        let output = String::from_utf8(console.into_output()).expect("utf8");
        assert_eq!(output, "a?\nb?\nc?\nd?\n");
    }

    #[test]
    fn say_writes_a_line() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.say("hello").expect("say");
        assert_eq!(console.into_output(), b"hello\n");
    }
}
