//! Cryptographic operations for Notes.
//!
//! This module provides per-note password protection:
//! - **PBKDF2-HMAC-SHA256**: Iterated key derivation from the user's password
//! - **AES-256-GCM**: Authenticated encryption of note content
//!
//! ## Security Model
//!
//! - The password is the only key store: keys are re-derived on every
//!   operation and zeroized when dropped
//! - Every encryption draws a fresh salt and IV from the OS random source
//! - Decryption has a single failure signal (the AEAD tag check), so a
//!   wrong password and tampered data are indistinguishable
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the note store
//! - Offline brute-force attacks on a note password
//! - Silent modification of an encrypted note
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Forgotten passwords (there is no recovery path)

pub mod bundle;
pub mod cipher;
pub mod key;
pub mod password;

pub use bundle::CipherBundle;
pub use cipher::{decrypt, encrypt};
pub use key::{derive_key, DerivedKey};
pub use password::validate_password;
