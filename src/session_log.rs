//! Newline-delimited JSON record of every command a session applies.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameState;
use crate::engine::SettleEvent;
use crate::types::Command;

/// One applied command and the state it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub seq: u64,
    pub command: Command,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub total_cleared_rows: u32,
    pub game_end: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled: Option<SettleEvent>,
}

impl LogRecord {
    pub fn new(seq: u64, command: Command, state: &GameState, settled: Option<SettleEvent>) -> Self {
        Self {
            seq,
            command,
            score: state.score,
            high_score: state.high_score,
            level: state.level,
            total_cleared_rows: state.total_cleared_rows,
            game_end: state.game_end,
            settled,
        }
    }
}

/// Appends [`LogRecord`]s as JSON lines.
pub struct SessionLog<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl SessionLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open session log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SessionLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn record(&mut self, record: &LogRecord) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
