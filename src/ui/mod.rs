//! Terminal input/output.
//!
//! The game core only ever needs two primitives: show a piece of text and
//! block for the next line of input. Everything here is plumbing around
//! stdout/stdin with crossterm styling; no game rules live in this module.

pub mod menus;

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use crate::world::map::MapError;

/// Wraps stdout/stdin behind the two primitives the game loop needs.
pub struct Console {
    stdout: io::Stdout,
    stdin: io::Stdin,
}

impl Console {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            stdin: io::stdin(),
        }
    }

    /// Prints one block of text on its own line.
    pub fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{text}")
    }

    /// Prints a highlighted section header.
    pub fn header(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{}", text.bold().cyan())
    }

    /// Prints an attention-grabbing warning line.
    pub fn alert(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{}", text.bold().red())
    }

    /// Blocks for one line of input, echoing `label` first. The returned
    /// line is trimmed.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.stdout, "{label}")?;
        self.stdout.flush()?;
        let mut line = String::new();
        self.stdin.lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Waits for the player before continuing, pacing longer sequences.
    pub fn pause(&mut self) -> io::Result<()> {
        write!(self.stdout, "{}", "Press Enter to continue.".dim())?;
        self.stdout.flush()?;
        let mut line = String::new();
        self.stdin.lock().read_line(&mut line)?;
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// A navigation error escaping the orchestrator means corrupted game
/// state; surface it as a fatal I/O-level error rather than continuing.
pub fn fatal(error: MapError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, error.to_string())
}
