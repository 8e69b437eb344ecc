//! The stored form of an encrypted note.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::key::SALT_LENGTH;
use crate::error::{NotesError, Result};

/// AES-GCM nonce length in bytes.
pub const IV_LENGTH: usize = 12;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LENGTH: usize = 16;

/// Ciphertext, IV and salt of one encrypted note, each base64-encoded.
///
/// Serializes as `{ "cipher": .., "iv": .., "salt": .. }`. A bundle is
/// self-contained: with the password it decrypts without any other state.
/// Bundles are never modified; decryption yields a new plaintext value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherBundle {
    cipher: String,
    iv: String,
    salt: String,
}

/// Raw bytes of a bundle after transport decoding.
pub(crate) struct DecodedBundle {
    pub cipher: Vec<u8>,
    pub iv: [u8; IV_LENGTH],
    pub salt: [u8; SALT_LENGTH],
}

impl CipherBundle {
    /// Build a bundle from already-encoded fields (e.g. loaded from storage).
    ///
    /// Fields are not validated here; a malformed bundle fails at decrypt time.
    pub fn from_encoded(
        cipher: impl Into<String>,
        iv: impl Into<String>,
        salt: impl Into<String>,
    ) -> Self {
        Self {
            cipher: cipher.into(),
            iv: iv.into(),
            salt: salt.into(),
        }
    }

    pub(crate) fn from_raw(cipher: &[u8], iv: &[u8; IV_LENGTH], salt: &[u8; SALT_LENGTH]) -> Self {
        Self {
            cipher: STANDARD.encode(cipher),
            iv: STANDARD.encode(iv),
            salt: STANDARD.encode(salt),
        }
    }

    /// Base64 ciphertext including the trailing authentication tag.
    pub fn cipher(&self) -> &str {
        &self.cipher
    }

    /// Base64 initialization vector (12 bytes decoded).
    pub fn iv(&self) -> &str {
        &self.iv
    }

    /// Base64 key-derivation salt (16 bytes decoded).
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Decode all three fields.
    ///
    /// Any malformed field is reported as `DecryptionFailed`, the same error
    /// a wrong password produces.
    pub(crate) fn decode(&self) -> Result<DecodedBundle> {
        let cipher = STANDARD
            .decode(&self.cipher)
            .map_err(|_| NotesError::DecryptionFailed)?;
        if cipher.len() < TAG_LENGTH {
            return Err(NotesError::DecryptionFailed);
        }
        let iv = decode_fixed::<IV_LENGTH>(&self.iv)?;
        let salt = decode_fixed::<SALT_LENGTH>(&self.salt)?;
        Ok(DecodedBundle { cipher, iv, salt })
    }
}

fn decode_fixed<const N: usize>(value: &str) -> Result<[u8; N]> {
    STANDARD
        .decode(value)
        .ok()
        .and_then(|bytes| <[u8; N]>::try_from(bytes.as_slice()).ok())
        .ok_or(NotesError::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CipherBundle {
        CipherBundle::from_raw(&[7u8; 32], &[1u8; IV_LENGTH], &[2u8; SALT_LENGTH])
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("cipher"));
        assert!(object.contains_key("iv"));
        assert!(object.contains_key("salt"));
        assert_eq!(object["iv"], "AQEBAQEBAQEBAQEB");
    }

    #[test]
    fn test_decode_lengths() {
        let decoded = sample().decode().unwrap();
        assert_eq!(decoded.cipher.len(), 32);
        assert_eq!(decoded.iv, [1u8; IV_LENGTH]);
        assert_eq!(decoded.salt, [2u8; SALT_LENGTH]);
    }

    #[test]
    fn test_malformed_fields_are_decryption_failures() {
        let good = sample();
        let cases = [
            CipherBundle::from_encoded("%%%", good.iv(), good.salt()),
            CipherBundle::from_encoded(good.cipher(), "AAAA", good.salt()),
            CipherBundle::from_encoded(good.cipher(), good.iv(), "not base64!"),
            CipherBundle::from_encoded("AAAA", good.iv(), good.salt()),
        ];
        for bundle in cases {
            assert!(matches!(bundle.decode(), Err(NotesError::DecryptionFailed)));
        }
    }
}
