//! Shared output layer: every command renders either human-readable text
//! or stable JSON from the same serializable payload.

use std::io::{self, Write};

use serde::Serialize;

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text.
    Human,
    /// Machine-readable JSON, one object per invocation.
    Json,
}

/// Render `payload` to stdout: JSON in [`OutputMode::Json`], otherwise
/// the `human` closure.
pub fn render<T: Serialize>(
    mode: OutputMode,
    payload: &T,
    human: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut w = stdout.lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut w, payload)?;
            writeln!(w)?;
        }
        OutputMode::Human => human(payload, &mut w)?,
    }
    Ok(())
}

/// Render a left-aligned key/value line in human output.
pub fn kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<12} {}", format!("{key}:"), value.as_ref())
}
