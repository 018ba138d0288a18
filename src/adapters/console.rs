use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn print_line(&mut self, line: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        Ok(())
    }
}

/// Keeps every line in memory. Used by tests and by `--format json`.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    lines: Vec<String>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Console for MemoryConsole {
    fn print_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
