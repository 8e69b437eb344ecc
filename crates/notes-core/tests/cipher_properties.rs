use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use notes_core::crypto::bundle::{IV_LENGTH, TAG_LENGTH};
use notes_core::crypto::key::SALT_LENGTH;
use notes_core::{decrypt, encrypt, CipherBundle, NotesError};

const PASSWORD: &str = "correct-horse";

fn decoded(value: &str) -> Vec<u8> {
    STANDARD.decode(value).expect("bundle fields should be base64")
}

#[test]
fn test_round_trip_restores_plaintext() {
    let long = "long ".repeat(2000);
    let samples = [
        "",
        "x",
        "<p>Hello <b>world</b></p>",
        "naïve café ☕",
        long.as_str(),
    ];
    for plaintext in samples {
        let bundle = encrypt(plaintext, PASSWORD).expect("encrypt should succeed");
        let restored = decrypt(&bundle, PASSWORD).expect("decrypt should succeed");
        assert_eq!(restored, plaintext);
    }
}

#[test]
fn test_wrong_password_fails() {
    let bundle = encrypt("secret", PASSWORD).expect("encrypt should succeed");
    let result = decrypt(&bundle, "correct-horsf");
    assert!(matches!(result, Err(NotesError::DecryptionFailed)));
}

#[test]
fn test_flipping_any_cipher_byte_fails() {
    let bundle = encrypt("tamper with me", PASSWORD).expect("encrypt should succeed");
    let raw = decoded(bundle.cipher());
    assert_eq!(raw.len(), "tamper with me".len() + TAG_LENGTH);

    for index in 0..raw.len() {
        let mut tampered = raw.clone();
        tampered[index] ^= 0x01;
        let forged =
            CipherBundle::from_encoded(STANDARD.encode(&tampered), bundle.iv(), bundle.salt());
        assert!(
            matches!(decrypt(&forged, PASSWORD), Err(NotesError::DecryptionFailed)),
            "flipping byte {} should be detected",
            index
        );
    }
}

#[test]
fn test_truncated_cipher_fails() {
    let bundle = encrypt("short", PASSWORD).expect("encrypt should succeed");
    let raw = decoded(bundle.cipher());
    let forged = CipherBundle::from_encoded(
        STANDARD.encode(&raw[..raw.len() - 1]),
        bundle.iv(),
        bundle.salt(),
    );
    assert!(matches!(
        decrypt(&forged, PASSWORD),
        Err(NotesError::DecryptionFailed)
    ));
}

#[test]
fn test_repeated_encryption_is_randomized() {
    let first = encrypt("same text", PASSWORD).expect("encrypt should succeed");
    let second = encrypt("same text", PASSWORD).expect("encrypt should succeed");

    assert_ne!(first.cipher(), second.cipher());
    assert_ne!(first.iv(), second.iv());
    assert_ne!(first.salt(), second.salt());
}

#[test]
fn test_salt_and_iv_are_fresh_and_distinct() {
    let bundle = encrypt("fresh", PASSWORD).expect("encrypt should succeed");
    let iv = decoded(bundle.iv());
    let salt = decoded(bundle.salt());

    assert_eq!(iv.len(), IV_LENGTH);
    assert_eq!(salt.len(), SALT_LENGTH);
    assert_ne!(&salt[..IV_LENGTH], &iv[..]);
    assert!(iv.iter().any(|b| *b != 0));
    assert!(salt.iter().any(|b| *b != 0));
}

#[test]
fn test_bundle_alone_is_enough_to_decrypt() {
    let json = {
        let bundle = encrypt("portable", PASSWORD).expect("encrypt should succeed");
        serde_json::to_string(&bundle).expect("bundle should serialize")
    };

    let restored: CipherBundle = serde_json::from_str(&json).expect("bundle should deserialize");
    assert_eq!(decrypt(&restored, PASSWORD).expect("decrypt should succeed"), "portable");
}

#[test]
fn test_meeting_notes_scenario() {
    let bundle = encrypt("Meeting notes: discuss budget", "correct-horse")
        .expect("encrypt should succeed");

    assert_eq!(
        decrypt(&bundle, "correct-horse").expect("decrypt should succeed"),
        "Meeting notes: discuss budget"
    );
    let err = decrypt(&bundle, "wrong-horse").expect_err("wrong password must fail");
    assert!(matches!(err, NotesError::DecryptionFailed));
    assert_eq!(err.to_string(), "Decryption failed");
}

#[test]
fn test_empty_password_is_invalid_input() {
    assert!(matches!(encrypt("text", ""), Err(NotesError::InvalidInput(_))));

    let bundle = encrypt("text", PASSWORD).expect("encrypt should succeed");
    assert!(matches!(decrypt(&bundle, ""), Err(NotesError::InvalidInput(_))));
}

#[test]
fn test_browser_bundle_decrypts() {
    // Produced by WebCrypto: PBKDF2-SHA256 100k rounds, AES-GCM 256, 12-byte IV.
    let json = r#"{"cipher":"Qc09VU2+A3+iin+t+my7IqvVCN070ovvC/PDxxCoYXH7HC/TVbRPdoCdcFoTktioVg==","iv":"iqzaSWpV1MMs7fKe","salt":"fXgBaTOKyLWmqGEwnWSHYA=="}"#;
    let bundle: CipherBundle = serde_json::from_str(json).expect("bundle should deserialize");

    assert_eq!(
        decrypt(&bundle, "correct-horse").expect("decrypt should succeed"),
        "Meeting notes: discuss budget ☕"
    );
    assert!(matches!(
        decrypt(&bundle, "wrong-horse"),
        Err(NotesError::DecryptionFailed)
    ));
}
