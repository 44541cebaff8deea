pub mod extractor;
pub mod store;

use std::fs;
use std::path::PathBuf;

pub use extractor::{extract_from_list, extract_from_markdown, extract_from_table};
pub use store::VocabStore;

use crate::config::ExtractConfig;
use crate::data::models::{MergeReport, VocabError};

/// Markdown files in `source_dir` named `<prefix>*.md`, sorted by name.
pub fn source_files(config: &ExtractConfig) -> Result<Vec<PathBuf>, VocabError> {
    let entries = fs::read_dir(&config.source_dir).map_err(|source| VocabError::Read {
        path: config.source_dir.clone(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.starts_with(&config.file_prefix) && name.ends_with(".md")
        })
        .map(|entry| entry.path())
        .collect();
    files.sort();
    Ok(files)
}

/// Extracts every source file into the stored vocabulary and rewrites it.
pub fn run_extraction(config: &ExtractConfig) -> Result<MergeReport, VocabError> {
    let mut store = VocabStore::load(&config.output)?;

    let mut added = 0;
    for path in source_files(config)? {
        for record in extract_from_markdown(&path)? {
            let label = format!("{} ({})", record.word, record.source);
            if store.insert(record)? {
                log::info!("  + {}", label);
                added += 1;
            }
        }
    }

    store.save()?;

    let report = MergeReport {
        added,
        existing: store.existing(),
        total: store.len(),
    };
    log::info!(
        "Done: {} new, {} existing, {} total",
        report.added, report.existing, report.total
    );
    Ok(report)
}
