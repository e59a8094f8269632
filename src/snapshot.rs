use crate::session::WordCounts;
use chrono::{DateTime, Local, NaiveDateTime};
use regex::Regex;
use serde_json::{Map, Value};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Filename prefix shared by all snapshot files
pub const FILE_PREFIX: &str = "wordfreq";

/// Timestamp format embedded in snapshot filenames
pub const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";

/// Snapshot filename for a run that completed at `time`
pub fn snapshot_filename(time: &DateTime<Local>) -> String {
    format!("{}_{}.json", FILE_PREFIX, time.format(TIMESTAMP_FORMAT))
}

/// Extract the embedded run timestamp from a snapshot filename.
///
/// Returns `None` for files that do not match the snapshot naming pattern.
pub fn parse_snapshot_timestamp(filename: &str) -> Option<NaiveDateTime> {
    let pattern = format!(
        r"^{}_(\d{{4}}_\d{{2}}_\d{{2}}_\d{{2}}_\d{{2}}_\d{{2}})\.json$",
        FILE_PREFIX
    );
    let regex = Regex::new(&pattern).ok()?;
    let captures = regex.captures(filename)?;
    NaiveDateTime::parse_from_str(&captures[1], TIMESTAMP_FORMAT).ok()
}

/// Arrange the aggregate in ascending count order.
///
/// Downstream readers treat the last ten keys of a snapshot as its ten most
/// frequent words, so the emitted key order is part of the format. Ties are
/// broken alphabetically to keep output deterministic.
pub fn ordered_words(counts: &WordCounts) -> Map<String, Value> {
    let mut entries: Vec<(&String, &u64)> = counts.iter().collect();
    entries.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));

    let mut map = Map::with_capacity(entries.len());
    for (word, count) in entries {
        map.insert(word.clone(), Value::from(*count));
    }
    map
}

/// Write one snapshot file for a completed run.
///
/// The directory is created if missing. Nothing is written for an aborted
/// run; callers only reach this with a complete aggregate.
pub fn write_snapshot(
    dir: &Path,
    counts: &WordCounts,
    time: &DateTime<Local>,
) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(dir)?;

    let path = dir.join(snapshot_filename(time));
    let body = serde_json::to_string_pretty(&Value::Object(ordered_words(counts)))?;
    fs::write(&path, body)?;

    ::log::info!("Wrote snapshot with {} words to {}", counts.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_snapshot_filename_is_zero_padded() {
        let time = Local.with_ymd_and_hms(2022, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(snapshot_filename(&time), "wordfreq_2022_03_07_09_05_01.json");
    }

    #[test]
    fn test_parse_snapshot_timestamp_roundtrip() {
        let parsed = parse_snapshot_timestamp("wordfreq_2022_03_07_09_05_01.json").unwrap();
        assert_eq!(parsed.format(TIMESTAMP_FORMAT).to_string(), "2022_03_07_09_05_01");
    }

    #[test]
    fn test_parse_rejects_foreign_files() {
        assert!(parse_snapshot_timestamp("notes.json").is_none());
        assert!(parse_snapshot_timestamp("wordfreq_2022.json").is_none());
        assert!(parse_snapshot_timestamp("wordfreq_2022_03_07_09_05_01.json.bak").is_none());
    }

    #[test]
    fn test_ordered_words_ascending_with_top_words_last() {
        let mut counts = WordCounts::new();
        counts.insert("ritka".to_string(), 1);
        counts.insert("gyakori".to_string(), 9);
        counts.insert("közepes".to_string(), 4);

        let map = ordered_words(&counts);
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["ritka", "közepes", "gyakori"]);
    }

    #[test]
    fn test_ordered_words_ties_break_alphabetically() {
        let mut counts = WordCounts::new();
        counts.insert("b".to_string(), 2);
        counts.insert("a".to_string(), 2);
        counts.insert("c".to_string(), 2);

        let map = ordered_words(&counts);
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_write_snapshot_creates_directory_and_file() {
        let dir = std::env::temp_dir().join("wordpulse_snapshot_test");
        let _ = fs::remove_dir_all(&dir);

        let mut counts = WordCounts::new();
        counts.insert("alma".to_string(), 3);
        let time = Local.with_ymd_and_hms(2022, 3, 7, 9, 5, 1).unwrap();

        let path = write_snapshot(&dir, &counts, &time).unwrap();
        assert!(path.exists());

        let body = fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["alma"], Value::from(3));

        let _ = fs::remove_dir_all(&dir);
    }
}
