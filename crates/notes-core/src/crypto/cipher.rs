//! AES-256-GCM encryption of note content.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use zeroize::Zeroizing;

use super::bundle::{CipherBundle, IV_LENGTH};
use super::key::{derive_key, DerivedKey, SALT_LENGTH};
use crate::error::{NotesError, Result};

/// Encrypt note content under a password.
///
/// A fresh salt and IV are drawn from the operating system's random source
/// on every call, so encrypting the same text twice yields unrelated bundles.
///
/// # Errors
///
/// - `NotesError::InvalidInput` if the password is empty
/// - `NotesError::PlatformUnavailable` if no secure random source or cipher
///   engine is available
///
/// # Examples
///
/// ```
/// use notes_core::crypto::{decrypt, encrypt};
///
/// let bundle = encrypt("secret note", "correct-horse").unwrap();
/// assert_eq!(decrypt(&bundle, "correct-horse").unwrap(), "secret note");
/// ```
pub fn encrypt(plaintext: &str, password: &str) -> Result<CipherBundle> {
    let salt: [u8; SALT_LENGTH] = random_bytes()?;
    let iv: [u8; IV_LENGTH] = random_bytes()?;

    let key = derive_key(password, &salt)?;
    let cipher = aead(&key)?;
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&iv), plaintext.as_bytes())
        .map_err(|e| NotesError::PlatformUnavailable(format!("AES-GCM encryption failed: {}", e)))?;

    tracing::debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "encrypted note content"
    );
    Ok(CipherBundle::from_raw(&ciphertext, &iv, &salt))
}

/// Decrypt a bundle with the password it was created under.
///
/// # Errors
///
/// - `NotesError::InvalidInput` if the password is empty
/// - `NotesError::DecryptionFailed` for a wrong password or a corrupted,
///   truncated or tampered bundle. No partial plaintext is ever returned
///   and the causes are not distinguished.
pub fn decrypt(bundle: &CipherBundle, password: &str) -> Result<String> {
    if password.is_empty() {
        return Err(NotesError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    let decoded = bundle.decode()?;
    let key = derive_key(password, &decoded.salt)?;
    let cipher = aead(&key)?;

    let plaintext = Zeroizing::new(
        cipher
            .decrypt(Nonce::from_slice(&decoded.iv), decoded.cipher.as_slice())
            .map_err(|_| NotesError::DecryptionFailed)?,
    );

    let text = std::str::from_utf8(&plaintext)
        .map_err(|_| NotesError::DecryptionFailed)?
        .to_owned();
    tracing::debug!(plaintext_len = text.len(), "decrypted note content");
    Ok(text)
}

fn aead(key: &DerivedKey) -> Result<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| NotesError::PlatformUnavailable(format!("AES-GCM key setup failed: {}", e)))
}

fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    getrandom::getrandom(&mut bytes).map_err(|e| {
        NotesError::PlatformUnavailable(format!("Secure random source unavailable: {}", e))
    })?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let plaintext = "<p>Hello, <b>World</b>! This is secret.</p>";

        let bundle = encrypt(plaintext, "test-password-123").unwrap();
        let decrypted = decrypt(&bundle, "test-password-123").unwrap();

        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_ciphertext_carries_tag() {
        let bundle = encrypt("abc", "test-password-123").unwrap();
        let decoded = bundle.decode().unwrap();
        assert_eq!(decoded.cipher.len(), 3 + super::super::bundle::TAG_LENGTH);
    }

    #[test]
    fn test_wrong_password_fails_decryption() {
        let bundle = encrypt("secret data", "correct-password-123").unwrap();

        let result = decrypt(&bundle, "wrong-password-456");
        assert!(matches!(result, Err(NotesError::DecryptionFailed)));
    }

    #[test]
    fn test_empty_plaintext_round_trip() {
        let bundle = encrypt("", "test-password-123").unwrap();
        assert_eq!(decrypt(&bundle, "test-password-123").unwrap(), "");
    }

    #[test]
    fn test_unicode_round_trip() {
        let plaintext = "Zürich 🗒️ · 東京 meeting\n\ttabs and newlines";
        let bundle = encrypt(plaintext, "pässwörd-ünïcode").unwrap();
        assert_eq!(decrypt(&bundle, "pässwörd-ünïcode").unwrap(), plaintext);
    }

    #[test]
    fn test_empty_password_rejected_both_ways() {
        assert!(matches!(
            encrypt("text", ""),
            Err(NotesError::InvalidInput(_))
        ));

        let bundle = encrypt("text", "test-password-123").unwrap();
        assert!(matches!(
            decrypt(&bundle, ""),
            Err(NotesError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_swapped_iv_fails() {
        let first = encrypt("one", "test-password-123").unwrap();
        let second = encrypt("two", "test-password-123").unwrap();

        let mixed = CipherBundle::from_encoded(first.cipher(), second.iv(), first.salt());
        assert!(matches!(
            decrypt(&mixed, "test-password-123"),
            Err(NotesError::DecryptionFailed)
        ));
    }
}
