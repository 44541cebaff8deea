use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::data::models::{VocabError, VocabRecord};

lazy_static! {
    // | **word** | /phonetic/ | pos. definition | *example* |
    static ref TABLE_ROW_RE: Regex = Regex::new(
        r"\|\s*\*\*(\w[\w\s-]*?)\*\*\s*\|\s*(/[^/]+/)\s*\|\s*([^|]+?)\s*\|\s*\*?([^|]*?)\*?\s*\|"
    ).unwrap();
    static ref POS_PREFIX_RE: Regex = Regex::new(r"^([a-z]+\.(?:/[a-z]+\.)*)\s*(.*)").unwrap();
    static ref LIST_ITEM_SPLIT_RE: Regex = Regex::new(r"\n\d+\.\s+\*\*").unwrap();
    // word** /phonetic/ (pos)
    static ref LIST_HEAD_RE: Regex = Regex::new(r"^([\w-]+)\*\*\s*(/[^/]+/)?\s*\(([^)]+)\)?").unwrap();
    static ref EXAMPLE_LABEL_RE: Regex = Regex::new(r"^[Ee]xample:\s*").unwrap();
    static ref TRANSLATION_LABEL_RE: Regex = Regex::new(r"^(翻译|译):\s*").unwrap();
}

/// Splits `"n. 舰队"` into `("n.", "舰队")`. Without a recognisable prefix the
/// whole text is the definition.
fn split_pos(pos_def: &str) -> (String, String) {
    match POS_PREFIX_RE.captures(pos_def) {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => (String::new(), pos_def.to_string()),
    }
}

pub fn extract_from_table(text: &str, source: &str) -> Vec<VocabRecord> {
    TABLE_ROW_RE
        .captures_iter(text)
        .map(|caps| {
            let (pos, definition) = split_pos(caps[3].trim());
            VocabRecord {
                word: caps[1].trim().to_lowercase(),
                phonetic: caps[2].trim().to_string(),
                pos,
                definition,
                example: caps[4].trim().trim_matches('*').trim().to_string(),
                source: source.to_string(),
                ..Default::default()
            }
        })
        .collect()
}

/// Numbered entries:
///
/// ```text
/// 1. **armada** /ɑːˈmɑːdə/ (n.)
///    *舰队；大批*
///    Example: The armada sailed at dawn.
///    翻译: 舰队在黎明时起航。
/// ```
pub fn extract_from_list(text: &str, source: &str) -> Vec<VocabRecord> {
    let mut vocab = Vec::new();

    // The first chunk precedes any item
    for block in LIST_ITEM_SPLIT_RE.split(text).skip(1) {
        let mut lines = block.trim().lines();
        let Some(head) = lines.next().and_then(|first| LIST_HEAD_RE.captures(first)) else {
            continue;
        };

        let mut record = VocabRecord {
            word: head[1].trim().to_lowercase(),
            phonetic: head.get(2).map(|m| m.as_str().trim()).unwrap_or_default().to_string(),
            pos: head.get(3).map(|m| m.as_str().trim()).unwrap_or_default().to_string(),
            source: source.to_string(),
            ..Default::default()
        };

        for line in lines.map(str::trim) {
            if line.len() > 1
                && line.starts_with('*')
                && line.ends_with('*')
                && record.definition.is_empty()
            {
                record.definition = line.trim_matches('*').trim().to_string();
            } else if EXAMPLE_LABEL_RE.is_match(line) {
                record.example = EXAMPLE_LABEL_RE.replace(line, "").trim().to_string();
            } else if TRANSLATION_LABEL_RE.is_match(line) {
                record.example_cn = TRANSLATION_LABEL_RE.replace(line, "").trim().to_string();
            }
        }

        vocab.push(record);
    }

    vocab
}

/// Tries the table layout first and falls back to numbered entries.
/// Records are tagged with the file stem.
pub fn extract_from_markdown(path: &Path) -> Result<Vec<VocabRecord>, VocabError> {
    let text = fs::read_to_string(path).map_err(|source| VocabError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let source = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.trim_end_matches(".md"))
        .unwrap_or_default();

    let vocab = extract_from_table(&text, source);
    if !vocab.is_empty() {
        return Ok(vocab);
    }
    Ok(extract_from_list(&text, source))
}
