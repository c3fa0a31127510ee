//! Terminal I/O utilities for CLI.
//!
//! Provides the interactive input source used when arguments are missing.

use std::io::{self, BufRead, Write};

use glscaffold::{Error, InputSource};

/// Prompts on stderr and reads one line per answer from stdin.
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn prompt(&mut self, message: &str) -> glscaffold::Result<String> {
        prompt(message)
    }
}

pub fn prompt(message: &str) -> glscaffold::Result<String> {
    eprint!("{}", message);
    io::stderr().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .map_err(|e| Error::internal_io(e.to_string(), Some("read input".to_string())))?;

    Ok(line.trim().to_string())
}
