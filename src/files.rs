//! Whole-file helpers for save data and config blobs.
//!
//! Every function opens, uses and closes its handles within the call.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cipher::xor_bytes;
use crate::error::Result;

/// `true` if `path` names an existing regular file.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Reads a whole UTF-8 file.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Writes `contents`, creating missing parent directories first.
pub fn write_text(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    write_bytes(path.as_ref(), contents.as_bytes())
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

/// Deserializes a JSON file into `T`.
///
/// # Errors
/// `Io` if the file cannot be read, `Json` if it does not parse as `T`.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Reads a JSON file without a target schema.
pub fn read_json_value(path: impl AsRef<Path>) -> Result<serde_json::Value> {
    read_json(path)
}

/// Serializes `value` as pretty-printed JSON.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    write_text(path, &text)
}

/// XORs the bytes of `src` with `key` and writes them to `dst`.
///
/// Running it again with the same key restores the original, so
/// [`decrypt_file`] is the same operation. This is obfuscation, not
/// encryption.
///
/// # Errors
/// `InvalidArgument` for an empty key, `Io` on read or write failure.
pub fn encrypt_file(src: impl AsRef<Path>, dst: impl AsRef<Path>, key: &str) -> Result<()> {
    let data = fs::read(src)?;
    let out = xor_bytes(&data, key.as_bytes())?;
    write_bytes(dst.as_ref(), &out)
}

/// Inverse of [`encrypt_file`].
pub fn decrypt_file(src: impl AsRef<Path>, dst: impl AsRef<Path>, key: &str) -> Result<()> {
    encrypt_file(src, dst, key)
}
