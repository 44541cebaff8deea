use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::fs;
use std::path::Path;

use crate::data::models::cipher_models::{KEY_LEN, NONCE_LEN, TAG_LEN};
use crate::data::models::{CipherError, EncryptSummary};

pub fn parse_key(key_hex: &str) -> Result<[u8; KEY_LEN], CipherError> {
    let bytes = hex::decode(key_hex.trim()).map_err(|_| CipherError::InvalidKey)?;
    bytes.try_into().map_err(|_| CipherError::InvalidKey)
}

fn seal(plaintext: &[u8], key: &[u8; KEY_LEN]) -> Result<Vec<u8>, CipherError> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher.encrypt(&nonce, plaintext).map_err(|_| CipherError::Seal)?;

    // nonce || ciphertext || tag (the tag is already appended by aes-gcm)
    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// `Base64(nonce(12) || ciphertext || tag(16))`, standard alphabet.
pub fn encrypt(plaintext: &[u8], key: &[u8; KEY_LEN]) -> Result<String, CipherError> {
    Ok(STANDARD.encode(seal(plaintext, key)?))
}

pub fn decrypt(payload: &str, key: &[u8; KEY_LEN]) -> Result<Vec<u8>, CipherError> {
    let sealed = STANDARD.decode(payload.trim())?;
    if sealed.len() < NONCE_LEN + TAG_LEN {
        return Err(CipherError::Truncated);
    }

    let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CipherError::Open)
}

pub fn encrypt_file(input: &Path, output: &Path, key: &[u8; KEY_LEN]) -> Result<EncryptSummary, CipherError> {
    let plaintext = fs::read(input).map_err(|source| CipherError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let encoded = encrypt(&plaintext, key)?;
    fs::write(output, &encoded).map_err(|source| CipherError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    let summary = EncryptSummary {
        plaintext_bytes: plaintext.len(),
        sealed_bytes: NONCE_LEN + plaintext.len() + TAG_LEN,
        encoded_bytes: encoded.len(),
    };
    log::info!(
        "{} ({}B) -> {} ({}B, base64: {}B)",
        input.display(),
        summary.plaintext_bytes,
        output.display(),
        summary.sealed_bytes,
        summary.encoded_bytes
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

    #[test]
    fn round_trip() {
        let key = parse_key(KEY_HEX).unwrap();
        let payload = encrypt("[{\"word\":\"armada\"}]".as_bytes(), &key).unwrap();
        assert_eq!(decrypt(&payload, &key).unwrap(), b"[{\"word\":\"armada\"}]");
    }

    #[test]
    fn payload_layout_is_nonce_ciphertext_tag() {
        let key = parse_key(KEY_HEX).unwrap();
        let payload = encrypt(b"hello", &key).unwrap();
        let raw = STANDARD.decode(&payload).unwrap();
        assert_eq!(raw.len(), NONCE_LEN + 5 + TAG_LEN);
    }

    #[test]
    fn nonces_differ_between_runs() {
        let key = parse_key(KEY_HEX).unwrap();
        assert_ne!(encrypt(b"same", &key).unwrap(), encrypt(b"same", &key).unwrap());
    }

    #[test]
    fn tampering_and_wrong_key_fail() {
        let key = parse_key(KEY_HEX).unwrap();
        let mut raw = STANDARD.decode(encrypt(b"secret", &key).unwrap()).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        assert!(matches!(decrypt(&STANDARD.encode(&raw), &key), Err(CipherError::Open)));

        let other = parse_key(&"ff".repeat(32)).unwrap();
        let payload = encrypt(b"secret", &key).unwrap();
        assert!(matches!(decrypt(&payload, &other), Err(CipherError::Open)));
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        assert!(matches!(parse_key("abcd"), Err(CipherError::InvalidKey)));
        assert!(matches!(parse_key(&"zz".repeat(32)), Err(CipherError::InvalidKey)));

        let key = parse_key(KEY_HEX).unwrap();
        assert!(matches!(decrypt("!!!", &key), Err(CipherError::Encoding(_))));
        assert!(matches!(decrypt(&STANDARD.encode([0u8; 8]), &key), Err(CipherError::Truncated)));
    }

    #[test]
    fn encrypt_file_writes_decryptable_payload() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("vocab.json");
        let output = dir.path().join("vocab.enc");
        fs::write(&input, "[]").unwrap();

        let key = parse_key(KEY_HEX).unwrap();
        let summary = encrypt_file(&input, &output, &key).unwrap();
        assert_eq!(summary.plaintext_bytes, 2);
        assert_eq!(summary.sealed_bytes, 30);

        let payload = fs::read_to_string(&output).unwrap();
        assert_eq!(payload.len(), summary.encoded_bytes);
        assert_eq!(decrypt(&payload, &key).unwrap(), b"[]");
    }
}
