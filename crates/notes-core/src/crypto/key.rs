//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! Note keys are stretched from the user's password with a
//! slow, iterated hash so that guessing passwords offline stays expensive.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{NotesError, Result};

/// PBKDF2 iteration count.
///
/// Matches the browser client, so bundles created there decrypt here.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// AES-256 key size.
pub const KEY_LENGTH: usize = 32;

/// Length of the random salt stored with every bundle.
pub const SALT_LENGTH: usize = 16;

/// Per-note AES key stretched from its password. Wiped on drop.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Raw key for handing straight to the cipher. Never persist or log it.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Stretch `password` with `salt` into a note key.
///
/// The result is deterministic for a given pair. Each note gets its own
/// random salt, so two notes with the same password still use different
/// keys. Empty passwords and salts shorter than [`SALT_LENGTH`] are
/// rejected.
///
/// # Examples
///
/// ```
/// use notes_core::crypto::derive_key;
///
/// let salt = b"sixteen-byte-slt";
/// let key = derive_key("my-password", salt).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &str, salt: &[u8]) -> Result<DerivedKey> {
    if password.is_empty() {
        return Err(NotesError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    if salt.len() < SALT_LENGTH {
        return Err(NotesError::InvalidInput(format!(
            "Salt must be at least {} bytes",
            SALT_LENGTH
        )));
    }

    Ok(DerivedKey::from_bytes(stretch(
        password.as_bytes(),
        salt,
        PBKDF2_ITERATIONS,
    )))
}

fn stretch(password: &[u8], salt: &[u8], rounds: u32) -> [u8; KEY_LENGTH] {
    let mut out = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password, salt, rounds, &mut out);
    out
}
