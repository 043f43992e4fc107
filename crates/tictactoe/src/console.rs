//! Line-oriented console capability passed into the shell.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Reads and writes lines of text.
pub trait Console {
    /// Reads one line without its terminator; `None` once input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes text without a line break (prompts).
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Writes one line of text.
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write(line)?;
        self.write("\n")
    }
}

/// Console over the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a console over stdin and stdout.
    pub fn new() -> Self {
        Self
    }
}

/// Reads one line from `reader`, replacing invalid UTF-8 with U+FFFD.
///
/// Undecodable bytes reach the coordinate parser as text and are rejected
/// there like any other bad input.
pub fn read_line_lossy<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_line_lossy(&mut io::stdin().lock())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }
}

/// Console fed from a fixed script, recording everything written.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Creates a console whose input is raw bytes, split into lines the
    /// same way [`StdConsole`] reads stdin.
    pub fn from_bytes(mut bytes: &[u8]) -> io::Result<Self> {
        let mut lines = Vec::new();
        while let Some(line) = read_line_lossy(&mut bytes)? {
            lines.push(line);
        }
        Ok(Self::new(lines))
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Lines of input not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }
}
