//! Elliptic-curve key generation and public key derivation.
//!
//! This module provides:
//! - Private key generation on the NIST P-224, P-256, P-384 and P-521 curves
//! - SEC1 `EC PRIVATE KEY` and SPKI `PUBLIC KEY` PEM encoding
//! - Public key derivation from a serialized private key

mod curve;
mod error;
mod keys;
pub mod pem;

pub use curve::Curve;
pub use elliptic_curve::zeroize::Zeroizing;
pub use error::KeyError;
pub use keys::PrivateKey;

/// Generates a private key on the named curve and returns it as an
/// `EC PRIVATE KEY` PEM document.
///
/// `curve` must be one of `"P-224"`, `"P-256"`, `"P-384"` or `"P-521"`.
pub fn generate_key(curve: &str) -> Result<Zeroizing<String>, KeyError> {
    let curve: Curve = curve.parse()?;
    let pem = PrivateKey::generate(curve).to_pem()?;
    tracing::debug!(%curve, bits = curve.bits(), "generated private key");
    Ok(pem)
}

/// Derives the `PUBLIC KEY` PEM document of a serialized private key.
pub fn derive_public_key(private_key: &[u8]) -> Result<String, KeyError> {
    let key = PrivateKey::from_pem(private_key)?;
    let pem = key.public_key_pem()?;
    tracing::debug!(curve = %key.curve(), "derived public key");
    Ok(pem)
}
