//! Serialization of derived keys
//!
//! Turns a [`PrivateKeyMaterial`] into OpenSSH or PEM text, for the private
//! key or its public component. The format can be chosen explicitly or
//! auto-detected from the derivation context: `mtls/...` contexts get PEM,
//! `ssh/...` contexts get OpenSSH, RSA keys without a recognizable context
//! default to PEM.

mod pem;
mod ssh;

use std::str::FromStr;

use zeroize::Zeroizing;

use crate::derive::{KeyType, PrivateKeyMaterial};
use crate::error::{DetkeyError, Result};

/// Supported output encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ssh,
    Pem,
}

impl FromStr for OutputFormat {
    type Err = DetkeyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ssh" => Ok(OutputFormat::Ssh),
            "pem" => Ok(OutputFormat::Pem),
            other => Err(DetkeyError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Pick an output format from the derivation context and key type
///
/// Matches whole `/`-delimited context segments, so `mtls/ca/v1` selects PEM
/// while `notssh/x` matches nothing and falls through to the defaults.
pub fn detect_format(context: &str, key_type: KeyType) -> OutputFormat {
    if has_segment(context, "mtls") {
        OutputFormat::Pem
    } else if has_segment(context, "ssh") {
        OutputFormat::Ssh
    } else if key_type == KeyType::Ed25519 {
        OutputFormat::Ssh
    } else {
        OutputFormat::Pem
    }
}

fn has_segment(context: &str, name: &str) -> bool {
    context.split('/').any(|segment| segment == name)
}

/// Serialize the private key
pub fn private_key_text(
    key: &PrivateKeyMaterial,
    format: OutputFormat,
) -> Result<Zeroizing<String>> {
    match format {
        OutputFormat::Ssh => ssh::private_key_openssh(key),
        OutputFormat::Pem => pem::private_key_pem(key),
    }
}

/// Serialize the public component of the key
pub fn public_key_text(key: &PrivateKeyMaterial, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Ssh => ssh::public_key_openssh(key),
        OutputFormat::Pem => pem::public_key_pem(key),
    }
}
