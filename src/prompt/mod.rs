//! Interactive input.
//!
//! Prompting is the only blocking I/O in an asking pass. It sits behind the
//! [`Prompter`] trait so pages can be driven from a terminal, a script, or a
//! test harness.

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Source of answers and sink for intro and help text.
pub trait Prompter {
    /// Show `text` and read one answer.
    ///
    /// An empty line yields `default` when one is given. A closed input
    /// stream is reported as [`io::ErrorKind::UnexpectedEof`].
    fn ask(&mut self, text: &str, default: Option<&str>) -> io::Result<String>;

    /// Print one informational line.
    fn say(&mut self, line: &str) -> io::Result<()>;
}

/// Line-oriented prompter over any reader/writer pair.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, text: &str, default: Option<&str>) -> io::Result<String> {
        write!(self.output, "{}> ", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        match default {
            Some(default) if answer.trim().is_empty() => Ok(default.to_string()),
            _ => Ok(answer.to_string()),
        }
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }
}
