//! Export targets for terminal hosts.
//!
//! Primary target is the OSC 52 escape sequence, which asks the terminal
//! emulator to place text on the system clipboard; it degrades to a plain
//! stdout dump when the terminal (or the pipe) cannot take it.

use base64::Engine;
use std::io::{IsTerminal, Write};

use yearsketch_core::{ExportError, ExportTarget};

const OSC52_MAX_BYTES: usize = 100_000;

/// OSC 52 terminal clipboard.
pub struct Osc52Clipboard;

impl ExportTarget for Osc52Clipboard {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ExportError> {
        let mut stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return Err(ExportError::Unavailable("clipboard".into()));
        }
        if text.len() > OSC52_MAX_BYTES {
            return Err(ExportError::WriteFailed {
                target: "clipboard".into(),
                message: "text too large for OSC 52".into(),
            });
        }
        let payload = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
        write!(stdout, "\x1b]52;c;{payload}\x07").map_err(|e| ExportError::WriteFailed {
            target: "clipboard".into(),
            message: e.to_string(),
        })?;
        stdout.flush().map_err(|e| ExportError::WriteFailed {
            target: "clipboard".into(),
            message: e.to_string(),
        })
    }
}

/// Fallback: print the text so the user can copy it by hand.
pub struct StdoutTarget;

impl ExportTarget for StdoutTarget {
    fn name(&self) -> &'static str {
        "stdout"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ExportError> {
        println!("{text}");
        Ok(())
    }
}
