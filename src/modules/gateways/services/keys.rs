//! PEM key-material validation and key-path normalization.
//!
//! Operators may configure key material as inline PEM text, a filesystem
//! path or an already-qualified `file://` reference; these helpers normalize
//! and resolve the three forms and validate the result without ever raising.

use std::fmt;
use std::fs;
use std::path::Path;

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::core::{AppError, Result};

pub const FILE_URI_PREFIX: &str = "file://";

const PEM_LITERAL_PREFIX: &str = "---";

/// Every decoding attempted for a key blob, with its failure message.
///
/// Collected so a single log entry can carry the full diagnostic trail, the
/// way the underlying crypto library queues one error per failed attempt.
#[derive(Debug)]
pub struct KeyError {
    attempts: Vec<String>,
}

impl KeyError {
    fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    fn record(&mut self, format: &str, err: impl fmt::Display) {
        self.attempts.push(format!("{format}: {err}"));
    }

    pub fn attempts(&self) -> &[String] {
        &self.attempts
    }
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.attempts.join("; "))
    }
}

impl std::error::Error for KeyError {}

/// Parses a public key in SPKI (`BEGIN PUBLIC KEY`) or PKCS#1
/// (`BEGIN RSA PUBLIC KEY`) PEM form. Key type and strength are not
/// inspected.
pub fn parse_public_key(pem: &str) -> std::result::Result<RsaPublicKey, KeyError> {
    let mut errors = KeyError::new();

    match RsaPublicKey::from_public_key_pem(pem) {
        Ok(key) => return Ok(key),
        Err(err) => errors.record("spki", err),
    }

    match RsaPublicKey::from_pkcs1_pem(pem) {
        Ok(key) => return Ok(key),
        Err(err) => errors.record("pkcs1", err),
    }

    Err(errors)
}

/// Parses a private key. An empty passphrase means the key is expected to be
/// unencrypted (PKCS#8 or PKCS#1); otherwise encrypted PKCS#8 is tried
/// first.
pub fn parse_private_key(
    pem: &str,
    passphrase: &str,
) -> std::result::Result<RsaPrivateKey, KeyError> {
    let mut errors = KeyError::new();

    if !passphrase.is_empty() {
        match RsaPrivateKey::from_pkcs8_encrypted_pem(pem, passphrase.as_bytes()) {
            Ok(key) => return Ok(key),
            Err(err) => errors.record("encrypted pkcs8", err),
        }
    }

    match RsaPrivateKey::from_pkcs8_pem(pem) {
        Ok(key) => return Ok(key),
        Err(err) => errors.record("pkcs8", err),
    }

    match RsaPrivateKey::from_pkcs1_pem(pem) {
        Ok(key) => return Ok(key),
        Err(err) => errors.record("pkcs1", err),
    }

    Err(errors)
}

/// Normalizes a configured key reference.
///
/// Inline PEM text, empty values and already-qualified `file://` URIs pass
/// through trimmed; a path to an existing local file is qualified with the
/// `file://` scheme. Idempotent.
pub fn normalize_key_path(key_path: &str) -> String {
    let key_path = key_path.trim();

    if key_path.is_empty()
        || key_path.starts_with(FILE_URI_PREFIX)
        || key_path.starts_with(PEM_LITERAL_PREFIX)
    {
        return key_path.to_string();
    }

    if Path::new(key_path).is_file() {
        return format!("{FILE_URI_PREFIX}{key_path}");
    }

    key_path.to_string()
}

/// Resolves a normalized key reference to PEM text, reading `file://`
/// targets from disk and passing PEM literals through.
pub fn load_key_material(source: &str) -> Result<String> {
    let normalized = normalize_key_path(source);

    if let Some(path) = normalized.strip_prefix(FILE_URI_PREFIX) {
        return fs::read_to_string(path)
            .map_err(|err| AppError::key(format!("cannot read key file {path}: {err}")));
    }

    if normalized.starts_with(PEM_LITERAL_PREFIX) {
        return Ok(normalized);
    }

    Err(AppError::key(
        "key source is neither a PEM literal nor an existing file",
    ))
}
