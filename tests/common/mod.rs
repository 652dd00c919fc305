//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for transcript files in a temporary directory
pub struct TranscriptFileBuilder {
    temp_dir: TempDir,
    entries: Vec<TranscriptEntryBuilder>,
    raw_lines: Vec<String>,
}

impl TranscriptFileBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, entries: Vec::new(), raw_lines: Vec::new() }
    }

    pub fn with_entry(mut self, entry: TranscriptEntryBuilder) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn with_entries(mut self, entries: Vec<TranscriptEntryBuilder>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Append a raw line after the entries (JSONL only)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.raw_lines.push(line.to_string());
        self
    }

    /// Write the entries as JSON lines; returns the temp dir (keep it alive) and file path
    pub fn build_jsonl(self) -> (TempDir, PathBuf) {
        let mut lines: Vec<String> =
            self.entries.iter().map(|e| e.to_json().to_string()).collect();
        lines.extend(self.raw_lines);
        let path = self.temp_dir.path().join("transcript.jsonl");
        fs::write(&path, lines.join("\n")).expect("Failed to write transcript.jsonl");
        (self.temp_dir, path)
    }

    /// Write the entries as one JSON array
    pub fn build_json_array(self) -> (TempDir, PathBuf) {
        let values: Vec<Value> = self.entries.iter().map(|e| e.to_json()).collect();
        let path = self.temp_dir.path().join("transcript.json");
        fs::write(&path, Value::Array(values).to_string())
            .expect("Failed to write transcript.json");
        (self.temp_dir, path)
    }
}

impl Default for TranscriptFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one transcript record
pub struct TranscriptEntryBuilder {
    sender: String,
    text: String,
    timestamp: Value,
    side: String,
}

impl TranscriptEntryBuilder {
    pub fn new(text: &str) -> Self {
        Self {
            sender: "Patient".to_string(),
            text: text.to_string(),
            timestamp: Value::Null,
            side: "right".to_string(),
        }
    }

    pub fn sender(mut self, sender: &str) -> Self {
        self.sender = sender.to_string();
        self.side = "left".to_string();
        self
    }

    /// Timestamp at 09:30 UTC on the given day of 2024
    pub fn on(mut self, month: u32, day: u32) -> Self {
        let ts = Utc.with_ymd_and_hms(2024, month, day, 9, 30, 0).unwrap();
        self.timestamp = json!(ts.timestamp_millis());
        self
    }

    /// Raw timestamp value, e.g. a malformed string
    pub fn timestamp(mut self, value: Value) -> Self {
        self.timestamp = value;
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "sender": self.sender,
            "text": self.text,
            "timestampMs": self.timestamp,
            "side": self.side,
        })
    }
}

/// Empty data directory for conversation persistence
pub fn data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp data dir")
}

/// Path of the file backing the saved conversation
pub fn conversation_file(dir: &Path) -> PathBuf {
    dir.join("askwhy.conversation.json")
}

/// The January/February transcript used across integration tests:
/// January Week 1 and Week 3, February Week 1, and one undated entry
pub fn visit_transcript() -> Vec<TranscriptEntryBuilder> {
    vec![
        TranscriptEntryBuilder::new("Happy new year, booking a check-up").on(1, 2),
        TranscriptEntryBuilder::new("Cholesterol panel ordered").sender("Dr. Lee").on(1, 17),
        TranscriptEntryBuilder::new("My cholesterol is down!").on(2, 5),
        TranscriptEntryBuilder::new("Note without a date").sender("Front desk"),
    ]
}
