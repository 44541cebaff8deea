use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::models::{VocabError, VocabRecord};

/// The vocabulary JSON array on disk, with its set of known words.
///
/// Stored records are kept as raw JSON and written back untouched; only
/// their `word` is read.
pub struct VocabStore {
    path: PathBuf,
    records: Vec<Value>,
    known: HashSet<String>,
    existing: usize,
}

fn stored_word(record: &Value) -> Option<String> {
    record
        .get("word")
        .and_then(Value::as_str)
        .map(str::to_lowercase)
}

impl VocabStore {
    /// A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, VocabError> {
        let records: Vec<Value> = if path.exists() {
            let content = fs::read_to_string(path).map_err(|source| VocabError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&content).map_err(|source| VocabError::Malformed {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            Vec::new()
        };

        let known = records.iter().filter_map(stored_word).collect();
        Ok(Self {
            path: path.to_path_buf(),
            existing: records.len(),
            records,
            known,
        })
    }

    /// Appends the record unless its word is already stored. Returns whether it was added.
    pub fn insert(&mut self, record: VocabRecord) -> Result<bool, VocabError> {
        if !self.known.insert(record.dedup_key()) {
            return Ok(false);
        }
        self.records.push(serde_json::to_value(record)?);
        Ok(true)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.known.contains(&word.to_lowercase())
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Number of records present when the store was loaded.
    pub fn existing(&self) -> usize {
        self.existing
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the whole array back, two-space indented, non-ASCII kept verbatim.
    pub fn save(&self) -> Result<(), VocabError> {
        let mut json = serde_json::to_string_pretty(&self.records)?;
        json.push('\n');
        fs::write(&self.path, json).map_err(|source| VocabError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str) -> VocabRecord {
        VocabRecord {
            word: word.to_string(),
            phonetic: "/x/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabStore::load(&dir.path().join("vocab.json")).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.existing(), 0);
    }

    #[test]
    fn duplicates_are_rejected_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = VocabStore::load(&dir.path().join("vocab.json")).unwrap();

        assert!(store.insert(record("armada")).unwrap());
        assert!(!store.insert(record("Armada")).unwrap());
        assert!(store.contains("ARMADA"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn save_then_load_keeps_unknown_fields_and_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(
            &path,
            r#"[{"word": "Armada", "phonetic": "/ɑːˈmɑːdə/", "definition": "舰队", "level": 2}]"#,
        )
        .unwrap();

        let mut store = VocabStore::load(&path).unwrap();
        assert_eq!(store.existing(), 1);
        assert!(!store.insert(record("armada")).unwrap());
        assert!(store.insert(record("sanguine")).unwrap());
        store.save().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("舰队"));
        assert!(written.contains("\n  {\n    \"word\": \"Armada\""));
        assert!(written.contains("\"level\": 2"));

        let reloaded = VocabStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        // Fields absent from a stored record are not filled in
        assert!(reloaded.records()[0].get("example_cn").is_none());
        assert_eq!(reloaded.records()[1]["example_cn"], "");
    }

    #[test]
    fn stored_records_with_non_string_fields_round_trip_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        let original = "[\n  {\n    \"word\": \"a\",\n    \"phonetic\": null,\n    \"definition\": \"x\",\n    \"level\": 3\n  }\n]\n";
        fs::write(&path, original).unwrap();

        let mut store = VocabStore::load(&path).unwrap();
        assert!(store.contains("A"));
        assert!(store.insert(record("b")).unwrap());
        store.save().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let kept = "  {\n    \"word\": \"a\",\n    \"phonetic\": null,\n    \"definition\": \"x\",\n    \"level\": 3\n  }";
        assert!(written.starts_with(&format!("[\n{kept},\n")));
    }

    #[test]
    fn stored_record_without_word_is_kept_but_not_indexed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, r#"[{"note": "no word here"}, 7]"#).unwrap();

        let mut store = VocabStore::load(&path).unwrap();
        assert_eq!(store.existing(), 2);
        assert!(store.insert(record("armada")).unwrap());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            VocabStore::load(&path),
            Err(VocabError::Malformed { .. })
        ));
    }
}
