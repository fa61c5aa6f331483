//! Line-oriented collaborators the session talks to.

use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
};

/// Supplies raw mission text and per-turn command lines.
pub(crate) trait LineSource {
    /// Reads the whole content of a mission file.
    fn read_file(&mut self, path: &Path) -> io::Result<String>;

    /// Reads the next command line, or `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Accepts rendered output verbatim, in call order.
pub(crate) trait LineSink {
    /// Writes a complete line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Writes a prompt without a trailing newline.
    fn prompt(&mut self, prompt: &str) -> io::Result<()>;
}

/// Reads mission files from disk and commands from standard input.
#[derive(Debug, Default)]
pub(crate) struct ConsoleInput;

impl LineSource for ConsoleInput {
    fn read_file(&mut self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Writes rendered output to standard output.
#[derive(Debug, Default)]
pub(crate) struct ConsoleOutput;

impl LineSink for ConsoleOutput {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}")?;
        stdout.flush()
    }
}
