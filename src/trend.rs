use crate::snapshot::parse_snapshot_timestamp;
use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Size of the reference vocabulary tracked across snapshots
pub const REFERENCE_WORDS: usize = 10;

/// One point of the long-form trend table
#[derive(Debug, Clone, PartialEq)]
pub struct TrendRow {
    pub word: String,
    pub date: NaiveDateTime,
    pub percentage: f64,
}

/// Frequency trajectory of the reference vocabulary across snapshots.
///
/// The reference words are fixed by the chronologically first snapshot and
/// never change afterwards; a word missing from a later snapshot contributes
/// a 0% row, not a gap.
#[derive(Debug)]
pub struct TrendSeries {
    pub reference_words: Vec<String>,
    pub rows: Vec<TrendRow>,
}

/// Load every snapshot under `dir` and derive the trend series
pub fn trend_from_dir(dir: &Path) -> Result<TrendSeries, Box<dyn Error>> {
    let files = collect_snapshot_files(dir)?;
    if files.is_empty() {
        return Err(format!("no snapshot files found under {}", dir.display()).into());
    }
    ::log::info!("Found {} snapshots under {}", files.len(), dir.display());

    let mut snapshots = Vec::with_capacity(files.len());
    for (timestamp, path) in files {
        snapshots.push((timestamp, load_snapshot(&path)?));
    }

    Ok(build_series(&snapshots))
}

/// Recursively collect snapshot files, ordered by the timestamp embedded in
/// the filename (not by filesystem modification time)
pub fn collect_snapshot_files(dir: &Path) -> Result<Vec<(NaiveDateTime, PathBuf)>, Box<dyn Error>> {
    let mut files = Vec::new();
    collect_into(dir, &mut files)?;
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

fn collect_into(
    dir: &Path,
    files: &mut Vec<(NaiveDateTime, PathBuf)>,
) -> Result<(), Box<dyn Error>> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_into(&path, files)?;
        } else if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if let Some(timestamp) = parse_snapshot_timestamp(name) {
                files.push((timestamp, path));
            }
        }
    }
    Ok(())
}

/// Load one snapshot file, preserving its key order
pub fn load_snapshot(path: &Path) -> Result<Map<String, Value>, Box<dyn Error>> {
    let body = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&body)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(format!("{} is not a word-count object", path.display()).into()),
    }
}

/// The reference vocabulary of a snapshot: its last ten keys, most
/// frequent first.
///
/// Snapshots are written in ascending count order, so the tail of the key
/// sequence holds the most frequent words. This key-order contract is kept
/// for compatibility with existing snapshot files.
pub fn reference_vocabulary(first: &Map<String, Value>) -> Vec<String> {
    let keys: Vec<&String> = first.keys().collect();
    keys.iter()
        .rev()
        .take(REFERENCE_WORDS)
        .map(|k| (*k).clone())
        .collect()
}

/// Build the long-form series over chronologically ordered snapshots.
///
/// Every percentage uses the first snapshot's total word count as its
/// denominator, for all rows of all snapshots. Snapshots with no data are
/// skipped entirely.
pub fn build_series(snapshots: &[(NaiveDateTime, Map<String, Value>)]) -> TrendSeries {
    let Some((_, first)) = snapshots.first() else {
        return TrendSeries {
            reference_words: Vec::new(),
            rows: Vec::new(),
        };
    };

    let reference_words = reference_vocabulary(first);
    let first_total: u64 = first.values().filter_map(Value::as_u64).sum();

    let mut rows = Vec::new();
    for (date, words) in snapshots {
        if words.is_empty() {
            ::log::warn!("Skipping empty snapshot at {}", date);
            continue;
        }
        for word in &reference_words {
            let count = words.get(word).and_then(Value::as_u64).unwrap_or(0);
            let percentage = if first_total == 0 {
                0.0
            } else {
                count as f64 / first_total as f64 * 100.0
            };
            rows.push(TrendRow {
                word: word.clone(),
                date: *date,
                percentage,
            });
        }
    }

    TrendSeries {
        reference_words,
        rows,
    }
}

impl TrendSeries {
    /// Render the series as a `Word, Date, Percentage` table
    pub fn render_table(&self) -> String {
        let mut out = String::from("Word, Date, Percentage\n");
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{}, {}, {:.2}",
                row.word,
                row.date.format("%Y-%m-%d %H:%M:%S"),
                row.percentage
            );
        }
        out
    }
}
