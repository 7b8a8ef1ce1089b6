//! Toy ciphers, hashing and Base64.
//!
//! **None of this is cryptography.** The XOR and substitution ciphers
//! are obfuscation for save files and cheat deterrence; the djb2 hash is
//! a checksum. Do not protect anything valuable with them.
//!
//! # Wire formats
//!
//! - XOR output is lowercase hex, two digits per byte.
//! - Base64 uses the standard alphabet with padding. Decoding is
//!   permissive: characters outside `A-Za-z0-9+/` are dropped and the
//!   remainder is re-padded to a multiple of four.
//! - The substitution key is the 62-character alphabet shuffled by
//!   [`SeededRandom`]; a seed yields the same key on every platform.

use std::fmt::Write as _;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Result, UtilError};
use crate::random::SeededRandom;

/// Lowercase letters, uppercase letters, then digits.
pub const SUBSTITUTION_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const ALPHABET_LEN: usize = 62;

/// XORs `data` against `key` repeated to the data length.
///
/// Applying it twice with the same key restores the input.
///
/// # Errors
/// Returns `InvalidArgument` for an empty key.
pub fn xor_bytes(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(UtilError::invalid("key", "must not be empty"));
    }
    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect())
}

/// Encodes bytes as lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // Writing to a String cannot fail
        let _ = write!(out, "{b:02x}");
    }
    out
}

/// Decodes a hex string (either case).
///
/// # Errors
/// Returns `Decode` for odd length or non-hex characters.
pub fn from_hex(hex: &str) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(UtilError::Decode(format!(
            "hex string has odd length {}",
            hex.len()
        )));
    }
    hex.as_bytes()
        .chunks(2)
        .map(|pair| {
            // from_str_radix alone would accept a leading '+'
            std::str::from_utf8(pair)
                .ok()
                .filter(|s| s.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| {
                    UtilError::Decode(format!(
                        "invalid hex digits {:?}",
                        String::from_utf8_lossy(pair)
                    ))
                })
        })
        .collect()
}

/// XOR-encrypts `text` with `key` and returns lowercase hex.
///
/// # Examples
/// ```
/// use u_toolkit::cipher::{xor_decrypt, xor_encrypt};
/// let hidden = xor_encrypt("hello", "key").unwrap();
/// assert_eq!(hidden, "030015070a");
/// assert_eq!(xor_decrypt(&hidden, "key").unwrap(), "hello");
/// ```
pub fn xor_encrypt(text: &str, key: &str) -> Result<String> {
    Ok(to_hex(&xor_bytes(text.as_bytes(), key.as_bytes())?))
}

/// Reverses [`xor_encrypt`].
///
/// # Errors
/// Returns `InvalidArgument` for an empty key, `Decode` for malformed hex
/// or when the decrypted bytes are not UTF-8 (usually a wrong key).
pub fn xor_decrypt(hex: &str, key: &str) -> Result<String> {
    let plain = xor_bytes(&from_hex(hex)?, key.as_bytes())?;
    String::from_utf8(plain).map_err(|e| UtilError::Decode(e.to_string()))
}

/// The substitution key for `seed`: the alphabet permuted by a
/// [`SeededRandom`] Fisher-Yates shuffle.
pub fn substitution_key(seed: u32) -> [char; ALPHABET_LEN] {
    let mut key = ['\0'; ALPHABET_LEN];
    for (slot, c) in key.iter_mut().zip(SUBSTITUTION_ALPHABET.chars()) {
        *slot = c;
    }
    SeededRandom::new(seed).shuffle(&mut key);
    key
}

fn substitute(text: &str, from: &[char], to: &[char]) -> String {
    text.chars()
        .map(|c| match from.iter().position(|&f| f == c) {
            Some(i) => to[i],
            None => c,
        })
        .collect()
}

/// Substitution-cipher encryption. Characters outside
/// [`SUBSTITUTION_ALPHABET`] pass through unchanged.
///
/// # Examples
/// ```
/// use u_toolkit::cipher::{substitution_decrypt, substitution_encrypt};
/// let hidden = substitution_encrypt("Level 42!", 2024);
/// assert_ne!(hidden, "Level 42!");
/// assert!(hidden.ends_with('!'));
/// assert_eq!(substitution_decrypt(&hidden, 2024), "Level 42!");
/// ```
pub fn substitution_encrypt(text: &str, seed: u32) -> String {
    let alphabet: Vec<char> = SUBSTITUTION_ALPHABET.chars().collect();
    substitute(text, &alphabet, &substitution_key(seed))
}

/// Reverses [`substitution_encrypt`] for the same seed.
pub fn substitution_decrypt(text: &str, seed: u32) -> String {
    let alphabet: Vec<char> = SUBSTITUTION_ALPHABET.chars().collect();
    substitute(text, &substitution_key(seed), &alphabet)
}

/// djb2 string hash (Bernstein): `h = 5381; h = h·33 + c` over Unicode
/// code points, masked to 31 bits so the result is non-negative in any
/// signed host integer.
///
/// # Examples
/// ```
/// use u_toolkit::cipher::djb2_hash;
/// assert_eq!(djb2_hash(""), 5381);
/// assert_eq!(djb2_hash("a"), 177_670);
/// ```
pub fn djb2_hash(text: &str) -> u32 {
    let hash = text.chars().fold(5381_u32, |h, c| {
        h.wrapping_mul(33).wrapping_add(u32::from(c))
    });
    hash & 0x7FFF_FFFF
}

/// Standard padded Base64 of the UTF-8 bytes of `text`.
pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Permissive Base64 decode.
///
/// # Errors
/// Returns `Decode` when the cleaned input is still not valid Base64 or
/// does not decode to UTF-8.
///
/// # Examples
/// ```
/// use u_toolkit::cipher::base64_decode;
/// // whitespace and a missing pad are tolerated
/// assert_eq!(base64_decode("aGVs\nbG8").unwrap(), "hello");
/// ```
pub fn base64_decode(text: &str) -> Result<String> {
    let mut cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '+' || *c == '/')
        .collect();
    while cleaned.len() % 4 != 0 {
        cleaned.push('=');
    }
    let bytes = STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| UtilError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| UtilError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_known_vector() {
        assert_eq!(xor_encrypt("hello", "key").unwrap(), "030015070a");
    }

    #[test]
    fn test_xor_roundtrip() {
        let hidden = xor_encrypt("The cake is a lie", "portal").unwrap();
        assert_eq!(xor_decrypt(&hidden, "portal").unwrap(), "The cake is a lie");
    }

    #[test]
    fn test_xor_empty_key() {
        assert!(xor_encrypt("abc", "").unwrap_err().is_invalid_argument());
        assert!(xor_decrypt("00", "").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_xor_empty_text() {
        assert_eq!(xor_encrypt("", "k").unwrap(), "");
        assert_eq!(xor_decrypt("", "k").unwrap(), "");
    }

    #[test]
    fn test_xor_bytes_symmetric() {
        let data = b"\x00\x01\xfe\xff";
        let once = xor_bytes(data, b"\xaa").unwrap();
        assert_eq!(xor_bytes(&once, b"\xaa").unwrap(), data.to_vec());
    }

    #[test]
    fn test_hex_decode_errors() {
        assert!(matches!(from_hex("abc"), Err(UtilError::Decode(_))));
        assert!(matches!(from_hex("zz"), Err(UtilError::Decode(_))));
        assert!(matches!(from_hex("+f"), Err(UtilError::Decode(_))));
        assert_eq!(from_hex("FF00").unwrap(), vec![0xff, 0x00]);
    }

    #[test]
    fn test_xor_decrypt_non_utf8() {
        // 0xff ^ b'a' = 0x9e, a lone continuation byte
        assert!(matches!(xor_decrypt("ff", "a"), Err(UtilError::Decode(_))));
    }

    #[test]
    fn test_substitution_key_is_permutation() {
        let key = substitution_key(99);
        let mut sorted: Vec<char> = key.to_vec();
        sorted.sort_unstable();
        let mut expected: Vec<char> = SUBSTITUTION_ALPHABET.chars().collect();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_substitution_key_deterministic() {
        assert_eq!(substitution_key(7), substitution_key(7));
        assert_ne!(substitution_key(7), substitution_key(8));
    }

    #[test]
    fn test_substitution_known_vector() {
        // Pinned output of the xorshift32 key schedule
        assert_eq!(substitution_encrypt("Level 42!", 2024), "JKBKD wl!");
        assert_eq!(substitution_decrypt("JKBKD wl!", 2024), "Level 42!");
    }

    #[test]
    fn test_substitution_passthrough() {
        let hidden = substitution_encrypt("a-b c_d!", 3);
        let chars: Vec<char> = hidden.chars().collect();
        assert_eq!(chars[1], '-');
        assert_eq!(chars[3], ' ');
        assert_eq!(chars[5], '_');
        assert_eq!(chars[7], '!');
        assert_eq!(substitution_decrypt(&hidden, 3), "a-b c_d!");
    }

    #[test]
    fn test_djb2_known_values() {
        assert_eq!(djb2_hash(""), 5381);
        assert_eq!(djb2_hash("a"), 177_670);
        assert_eq!(djb2_hash("abc"), 193_485_963);
        assert_eq!(djb2_hash("hello world"), 894_552_257);
        assert_eq!(
            djb2_hash("The quick brown fox jumps over the lazy dog"),
            885_799_134
        );
    }

    #[test]
    fn test_djb2_non_negative_range() {
        let long = "x".repeat(10_000);
        assert!(djb2_hash(&long) <= 0x7FFF_FFFF);
    }

    #[test]
    fn test_base64_known() {
        assert_eq!(base64_encode("hello"), "aGVsbG8=");
        assert_eq!(base64_encode("héllo wörld"), "aMOpbGxvIHfDtnJsZA==");
        assert_eq!(base64_decode("aGVsbG8=").unwrap(), "hello");
    }

    #[test]
    fn test_base64_permissive() {
        assert_eq!(base64_decode(" aGVs bG8 ").unwrap(), "hello");
        assert_eq!(base64_decode("aGVs*bG8").unwrap(), "hello");
        assert_eq!(base64_decode("").unwrap(), "");
    }

    #[test]
    fn test_base64_invalid() {
        // A single leftover character cannot encode a byte
        assert!(matches!(base64_decode("aGVsb"), Err(UtilError::Decode(_))));
        // Valid Base64 of non-UTF-8 bytes
        assert!(matches!(base64_decode("/w=="), Err(UtilError::Decode(_))));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn xor_roundtrip(text in "[ -~]{1,64}", key in "[ -~]{1,16}") {
            let hidden = xor_encrypt(&text, &key).unwrap();
            prop_assert_eq!(xor_decrypt(&hidden, &key).unwrap(), text);
        }

        #[test]
        fn base64_roundtrip(text in "\\PC{1,64}") {
            prop_assert_eq!(base64_decode(&base64_encode(&text)).unwrap(), text);
        }

        #[test]
        fn substitution_roundtrip(text in "[a-zA-Z0-9]{0,64}", seed in any::<u32>()) {
            let hidden = substitution_encrypt(&text, seed);
            prop_assert_eq!(hidden.chars().count(), text.chars().count());
            prop_assert_eq!(substitution_decrypt(&hidden, seed), text);
        }

        #[test]
        fn djb2_is_deterministic(text in "\\PC{0,64}") {
            prop_assert_eq!(djb2_hash(&text), djb2_hash(&text));
        }
    }
}
