//! Full-pipeline properties: determinism, context isolation, validation
//! boundaries. These run the real Argon2id parameters, so each `derive_key`
//! call carries the production stretching cost.

use std::collections::HashSet;

use detkey::derive::{
    derive_key, generate, stretch, EntropyStream, KeyType, PrivateKeyMaterial, DEFAULT_SALT,
};
use detkey::output::{self, OutputFormat};
use detkey::DetkeyError;

const PASSWORD: &[u8] = b"test-password-123";
const CONTEXT: &str = "ssh/test-server/v1";

fn ed25519_seed(material: &PrivateKeyMaterial) -> [u8; 32] {
    match material {
        PrivateKeyMaterial::Ed25519(key) => key.to_bytes(),
        PrivateKeyMaterial::Rsa(_) => panic!("expected an Ed25519 key"),
    }
}

#[test]
fn full_pipeline_is_deterministic() {
    let salt = DEFAULT_SALT.as_bytes();

    let first = derive_key(PASSWORD, salt, CONTEXT, KeyType::Ed25519).unwrap();
    let second = derive_key(PASSWORD, salt, CONTEXT, KeyType::Ed25519).unwrap();

    assert_eq!(ed25519_seed(&first), ed25519_seed(&second));
    assert_eq!(
        *output::private_key_text(&first, OutputFormat::Pem).unwrap(),
        *output::private_key_text(&second, OutputFormat::Pem).unwrap()
    );
    assert_eq!(
        output::public_key_text(&first, OutputFormat::Ssh).unwrap(),
        output::public_key_text(&second, OutputFormat::Ssh).unwrap()
    );
}

#[test]
fn fixed_vector_is_reproducible() {
    // The pinned derivation of the product: literal password, compiled-in
    // salt, a versioned ssh context. Independent invocations must agree
    // byte-for-byte; the capture test below records the value to pin.
    let salt = DEFAULT_SALT.as_bytes();

    let first = derive_key(PASSWORD, salt, CONTEXT, KeyType::Ed25519).unwrap();
    let second = derive_key(PASSWORD, salt, CONTEXT, KeyType::Ed25519).unwrap();

    assert_eq!(ed25519_seed(&first), ed25519_seed(&second));
}

// TODO: pin the printed seed as a golden constant once captured from a
// trusted build (`cargo test --release -- --ignored --nocapture`).
#[test]
#[ignore]
fn print_fixed_vector_seed() {
    let salt = DEFAULT_SALT.as_bytes();
    let material = derive_key(PASSWORD, salt, CONTEXT, KeyType::Ed25519).unwrap();
    println!("fixed-vector ed25519 seed: {}", hex::encode(ed25519_seed(&material)));
}

#[test]
fn context_isolation_over_100_pairs() {
    // One stretching pass, then a hundred context pairs through the
    // expansion and assembly stages; every derived public key must be
    // distinct.
    let salt = DEFAULT_SALT.as_bytes();
    let master_seed = stretch(PASSWORD, salt).unwrap();

    let mut seen = HashSet::new();
    for i in 0..100 {
        for context in [format!("ssh/host-{i}/v1"), format!("ssh/host-{i}/v2")] {
            let mut stream = EntropyStream::new(master_seed.as_slice(), salt, context.as_bytes());
            let material = generate(KeyType::Ed25519, &mut stream).unwrap();
            let public = match material {
                PrivateKeyMaterial::Ed25519(key) => key.verifying_key().to_bytes(),
                PrivateKeyMaterial::Rsa(_) => panic!("expected an Ed25519 key"),
            };
            assert!(seen.insert(public), "collision for context {context}");
        }
    }
    assert_eq!(seen.len(), 200);
}

#[test]
fn salt_changes_the_key() {
    let first = derive_key(PASSWORD, DEFAULT_SALT.as_bytes(), CONTEXT, KeyType::Ed25519).unwrap();
    let second = derive_key(PASSWORD, b"another-deployment-salt", CONTEXT, KeyType::Ed25519).unwrap();

    assert_ne!(ed25519_seed(&first), ed25519_seed(&second));
}

#[test]
fn empty_password_is_rejected() {
    let result = derive_key(b"", DEFAULT_SALT.as_bytes(), CONTEXT, KeyType::Ed25519);
    assert!(matches!(result, Err(DetkeyError::EmptyPassword)));
}

#[test]
fn unknown_key_type_is_rejected() {
    let err = "rsa8192".parse::<KeyType>().unwrap_err();
    assert!(matches!(
        err,
        DetkeyError::UnsupportedKeyType(ref name) if name == "rsa8192"
    ));
}

// RSA generation against the deterministic entropy source is minutes-slow in
// unoptimized builds; run with `cargo test --release -- --ignored`.
#[test]
#[ignore]
fn rsa2048_is_deterministic_end_to_end() {
    use rsa::traits::{PrivateKeyParts, PublicKeyParts};

    let salt = DEFAULT_SALT.as_bytes();
    let context = "mtls/ca/v1";

    let first = derive_key(PASSWORD, salt, context, KeyType::Rsa2048).unwrap();
    let second = derive_key(PASSWORD, salt, context, KeyType::Rsa2048).unwrap();

    match (&first, &second) {
        (PrivateKeyMaterial::Rsa(a), PrivateKeyMaterial::Rsa(b)) => {
            assert_eq!(a.n(), b.n());
            assert_eq!(a.e(), b.e());
            assert_eq!(a.d(), b.d());
        }
        _ => panic!("expected RSA keys"),
    }

    // Same inputs, different algorithm: trivially unrelated key material.
    let ed25519 = derive_key(PASSWORD, salt, context, KeyType::Ed25519).unwrap();
    assert_ne!(
        output::public_key_text(&first, OutputFormat::Pem).unwrap(),
        output::public_key_text(&ed25519, OutputFormat::Pem).unwrap()
    );
}
