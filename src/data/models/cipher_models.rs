use std::path::PathBuf;
use thiserror::Error;

pub const KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 12;
pub const TAG_LEN: usize = 16;

/// Sizes reported after encrypting a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptSummary {
    pub plaintext_bytes: usize,
    pub sealed_bytes: usize,
    pub encoded_bytes: usize,
}

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("No encryption key configured (set VOCAB_KEY)")]
    MissingKey,
    #[error("Key must be 32 bytes of hex")]
    InvalidKey,
    #[error("Payload is not valid Base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("Payload too short")]
    Truncated,
    #[error("Encryption failed")]
    Seal,
    #[error("Authentication failed")]
    Open,
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
