//! Append-only run log.
//!
//! The traversal record (selected paths, sent digits) goes to a line sink
//! so a run can be audited after the fact; live diagnostics stay on
//! `tracing`. The engine treats the sink as fire-and-forget and single
//! writer for the duration of one run.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing::warn;

/// Line-oriented append-only log sink.
///
/// Implementations own timestamping and error reporting; callers never
/// branch on logging failures.
pub trait LogSink: Send + Sync {
    fn append_line(&self, line: &str);
}

/// File-backed sink; each line is prefixed `YYYY/MM/DD HH:MM:SS, `.
pub struct FileLogSink {
    writer: Mutex<BufWriter<File>>,
}

impl FileLogSink {
    /// Open `path` for appending, creating it if needed.
    pub fn create(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

impl LogSink for FileLogSink {
    fn append_line(&self, line: &str) {
        let stamp = Local::now().format("%Y/%m/%d %H:%M:%S");
        let mut writer = self.writer.lock().unwrap();
        let result = writeln!(writer, "{stamp}, {line}").and_then(|_| writer.flush());
        if let Err(e) = result {
            warn!(error = %e, "run log write failed");
        }
    }
}

/// Discards every line; used when no run log is configured.
pub struct NullLogSink;

impl LogSink for NullLogSink {
    fn append_line(&self, _line: &str) {}
}

/// In-memory sink for asserting on logged lines in tests.
#[cfg(test)]
pub(crate) struct MemoryLogSink {
    lines: Mutex<Vec<String>>,
}

#[cfg(test)]
impl MemoryLogSink {
    pub(crate) fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl LogSink for MemoryLogSink {
    fn append_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_appends_timestamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");

        let sink = FileLogSink::create(&path).unwrap();
        sink.append_line("Path = 2");
        sink.append_line("Send DTMF = 7");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(", Path = 2"), "got: {}", lines[0]);
        assert!(lines[1].ends_with(", Send DTMF = 7"));
        // Timestamp prefix, e.g. "2026/08/06 12:00:00".
        assert_eq!(lines[0].split(", ").next().unwrap().len(), 19);
    }

    #[test]
    fn test_file_sink_reopens_in_append_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");

        FileLogSink::create(&path).unwrap().append_line("first");
        FileLogSink::create(&path).unwrap().append_line("second");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
