use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// One freshly extracted entry. Records already in `vocab.json` stay as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VocabRecord {
    pub word: String,        // Lowercased headword
    pub phonetic: String,    // IPA wrapped in slashes, e.g. "/ˈwɜːd/"
    pub pos: String,         // Part of speech, e.g. "n." or "v./n."
    pub definition: String,  // Chinese definition
    pub example: String,     // English example sentence
    pub example_cn: String,  // Translated example sentence
    pub source: String,      // File stem the entry was extracted from
}

impl VocabRecord {
    /// Key used for de-duplication across the stored set.
    pub fn dedup_key(&self) -> String {
        self.word.to_lowercase()
    }
}

/// Summary of one extraction run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    pub added: usize,
    pub existing: usize,
    pub total: usize,
}

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed vocabulary file {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
