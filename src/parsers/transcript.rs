use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::TranscriptEntry;
use crate::utils::validate_file_size;

const MAX_CONSECUTIVE_ERRORS: usize = 100;

/// Load a transcript from a JSON array or JSONL file
///
/// The format is sniffed from the first non-whitespace byte: `[` means a JSON array,
/// anything else is read as one record per line. Malformed records are logged and skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, exceeds the size limit, is not valid
/// JSON at the top level (array form), or if more than 50% of the records (or more than
/// 100 in a row) fail to decode.
pub fn load_transcript(path: &Path) -> Result<Vec<TranscriptEntry>> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open transcript file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read transcript file: {}", path.display()))?;

    parse_transcript_str(&content)
        .with_context(|| format!("Failed to load transcript from {}", path.display()))
}

/// Parse transcript records from an in-memory JSON array or JSONL string
pub fn parse_transcript_str(content: &str) -> Result<Vec<TranscriptEntry>> {
    let records: Vec<(usize, Value)> = if content.trim_start().starts_with('[') {
        let values: Vec<Value> =
            serde_json::from_str(content).context("Transcript is not a valid JSON array")?;
        values.into_iter().enumerate().map(|(idx, value)| (idx + 1, value)).collect()
    } else {
        jsonl_records(content)?
    };

    decode_records(records)
}

/// Split JSONL content into numbered JSON values, keeping undecodable lines as nulls so
/// they count against the failure thresholds
fn jsonl_records(content: &str) -> Result<Vec<(usize, Value)>> {
    let mut records = Vec::new();
    let mut consecutive_errors = 0;

    for (line_num, line) in content.lines().enumerate() {
        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(value) => {
                consecutive_errors = 0;
                records.push((line_num + 1, value));
            }
            Err(e) => {
                warn!(line = line_num + 1, error = %e, "Skipping malformed transcript line");
                consecutive_errors += 1;
                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    bail!(
                        "Too many consecutive parse errors ({}) in transcript",
                        consecutive_errors
                    );
                }
                records.push((line_num + 1, Value::Null));
            }
        }
    }

    Ok(records)
}

fn decode_records(records: Vec<(usize, Value)>) -> Result<Vec<TranscriptEntry>> {
    let total = records.len();
    let mut entries = Vec::with_capacity(total);
    let mut skipped_count = 0;
    let mut consecutive_errors = 0;

    for (record_num, value) in records {
        if value.is_null() {
            // Already reported by the line splitter
            skipped_count += 1;
            continue;
        }

        match serde_json::from_value::<TranscriptEntry>(value) {
            Ok(entry) => {
                entries.push(entry);
                consecutive_errors = 0;
            }
            Err(e) => {
                warn!(record = record_num, error = %e, "Skipping invalid transcript record");
                skipped_count += 1;
                consecutive_errors += 1;

                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    bail!(
                        "Too many consecutive invalid records ({}) in transcript",
                        consecutive_errors
                    );
                }
            }
        }
    }

    if total > 0 {
        let failure_rate = (skipped_count as f64) / (total as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many invalid transcript records: {} of {} failed ({:.1}%)",
                skipped_count,
                total,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        warn!(
            loaded = entries.len(),
            skipped = skipped_count,
            "Transcript loaded with skipped records"
        );
    } else {
        debug!(loaded = entries.len(), "Transcript loaded");
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::models::Side;

    #[test]
    fn test_parse_json_array() {
        let content = r#"[
            {"sender": "Ana", "text": "Morning!", "timestamp": 1704067200000, "side": "left"},
            {"sender": "Ben", "text": "Hi Ana", "timestamp": 1704067260000, "side": "right"}
        ]"#;

        let entries = parse_transcript_str(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sender, "Ana");
        assert_eq!(entries[1].side, Side::Right);
        assert_eq!(entries[1].timestamp_ms, Some(1704067260000));
    }

    #[test]
    fn test_parse_jsonl_skips_blank_lines() {
        let content = "{\"sender\":\"Ana\",\"text\":\"one\",\"timestamp\":1}\n\n   \n{\"sender\":\"Ben\",\"text\":\"two\",\"timestamp\":2}\n";

        let entries = parse_transcript_str(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].text, "two");
    }

    #[test]
    fn test_parse_jsonl_skips_malformed_minority() {
        let content = "{\"sender\":\"Ana\",\"text\":\"one\",\"timestamp\":1}\nnot json\n{\"sender\":\"Ben\",\"text\":\"two\",\"timestamp\":2}\n{\"sender\":\"Cy\",\"text\":\"three\"}";

        let entries = parse_transcript_str(content).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].timestamp_ms, None);
    }

    #[test]
    fn test_parse_array_skips_invalid_record() {
        let content = r#"[
            {"sender": "Ana", "text": "ok", "timestamp": 1},
            {"sender": "Ben"},
            {"sender": "Cy", "text": "also ok", "timestamp": 3}
        ]"#;

        let entries = parse_transcript_str(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].sender, "Cy");
    }

    #[test]
    fn test_parse_fails_when_majority_invalid() {
        let content = "garbage\nmore garbage\n{\"sender\":\"Ana\",\"text\":\"ok\"}";
        let result = parse_transcript_str(content);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Too many invalid transcript records"));
    }

    #[test]
    fn test_parse_fails_on_broken_array() {
        let result = parse_transcript_str("[{\"sender\": \"Ana\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_transcript_str("").unwrap().is_empty());
        assert!(parse_transcript_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_consecutive_error_limit() {
        let mut content = String::from("{\"sender\":\"Ana\",\"text\":\"ok\"}\n");
        for _ in 0..MAX_CONSECUTIVE_ERRORS {
            content.push_str("{bad\n");
        }
        let result = parse_transcript_str(&content);
        assert!(result.unwrap_err().to_string().contains("consecutive"));
    }

    #[test]
    fn test_load_transcript_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"[{{"sender":"Ana","content":"from file","timestamp":"2024-03-09T10:00:00Z"}}]"#)
            .unwrap();

        let entries = load_transcript(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "from file");
        assert!(entries[0].timestamp_ms.is_some());
    }

    #[test]
    fn test_load_transcript_missing_file() {
        let result = load_transcript(Path::new("/definitely/not/here.json"));
        assert!(result.unwrap_err().to_string().contains("Failed to open transcript file"));
    }
}
