//! Private key material for the supported curves.

use std::fmt;

use elliptic_curve::pkcs8::{Document, EncodePublicKey};
use elliptic_curve::sec1::ToEncodedPoint;
use elliptic_curve::zeroize::Zeroizing;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};

use super::pem::{self, LINE_ENDING, PUBLIC_KEY_LABEL};
use super::{Curve, KeyError};

/// Applies the same expression to whichever curve-specific key is held.
macro_rules! with_key {
    ($key:expr, $inner:ident => $body:expr) => {
        match $key {
            PrivateKey::P224($inner) => $body,
            PrivateKey::P256($inner) => $body,
            PrivateKey::P384($inner) => $body,
            PrivateKey::P521($inner) => $body,
        }
    };
}

/// An elliptic-curve private key on one of the supported curves.
///
/// The secret scalar is zeroized when the key is dropped.
#[derive(Clone)]
pub enum PrivateKey {
    P224(p224::SecretKey),
    P256(p256::SecretKey),
    P384(p384::SecretKey),
    P521(p521::SecretKey),
}

impl PrivateKey {
    /// Generates a new random key using the thread-local CSPRNG.
    pub fn generate(curve: Curve) -> Self {
        Self::generate_with(curve, &mut rand::thread_rng())
    }

    /// Generates a new random key from the supplied CSPRNG.
    pub fn generate_with<R: CryptoRng + RngCore>(curve: Curve, rng: &mut R) -> Self {
        match curve {
            Curve::P224 => PrivateKey::P224(p224::SecretKey::random(rng)),
            Curve::P256 => PrivateKey::P256(p256::SecretKey::random(rng)),
            Curve::P384 => PrivateKey::P384(p384::SecretKey::random(rng)),
            Curve::P521 => PrivateKey::P521(p521::SecretKey::random(rng)),
        }
    }

    /// Parses an `EC PRIVATE KEY` PEM document.
    pub fn from_pem(input: &[u8]) -> Result<Self, KeyError> {
        let (curve, document) = pem::decode_private_key(input)?;
        Self::from_sec1_der(curve, document.as_bytes())
    }

    /// Parses a SEC1 DER payload for a known curve.
    pub fn from_sec1_der(curve: Curve, der: &[u8]) -> Result<Self, KeyError> {
        let key = match curve {
            Curve::P224 => p224::SecretKey::from_sec1_der(der).map(PrivateKey::P224),
            Curve::P256 => p256::SecretKey::from_sec1_der(der).map(PrivateKey::P256),
            Curve::P384 => p384::SecretKey::from_sec1_der(der).map(PrivateKey::P384),
            Curve::P521 => p521::SecretKey::from_sec1_der(der).map(PrivateKey::P521),
        };

        key.map_err(|error| {
            tracing::debug!(%error, %curve, "rejected SEC1 private key");
            KeyError::Parse(format!("invalid {} private key", curve))
        })
    }

    /// Returns the curve this key lives on.
    pub fn curve(&self) -> Curve {
        match self {
            PrivateKey::P224(_) => Curve::P224,
            PrivateKey::P256(_) => Curve::P256,
            PrivateKey::P384(_) => Curve::P384,
            PrivateKey::P521(_) => Curve::P521,
        }
    }

    /// Serializes the key as an `EC PRIVATE KEY` PEM document carrying the
    /// named-curve parameter and the uncompressed public point.
    pub fn to_pem(&self) -> Result<Zeroizing<String>, KeyError> {
        let secret = Zeroizing::new(with_key!(self, key => key.to_bytes().to_vec()));
        let point = with_key!(self, key => {
            key.public_key().to_encoded_point(false).as_bytes().to_vec()
        });
        pem::encode_private_key(self.curve(), &secret, &point)
    }

    /// Returns the SubjectPublicKeyInfo DER encoding of the public key.
    pub fn public_key_der(&self) -> Result<Vec<u8>, KeyError> {
        self.public_key_document()
            .map(|document| document.as_bytes().to_vec())
    }

    /// Serializes the public key as a `PUBLIC KEY` PEM document.
    pub fn public_key_pem(&self) -> Result<String, KeyError> {
        self.public_key_document()?
            .to_pem(PUBLIC_KEY_LABEL, LINE_ENDING)
            .map_err(|error| KeyError::Encode(error.to_string()))
    }

    fn public_key_document(&self) -> Result<Document, KeyError> {
        with_key!(self, key => key.public_key().to_public_key_der())
            .map_err(|error| KeyError::Encode(error.to_string()))
    }

    /// Returns the lowercase hex SHA-256 digest of the public key's DER encoding.
    pub fn fingerprint(&self) -> Result<String, KeyError> {
        let der = self.public_key_der()?;
        Ok(hex::encode(Sha256::digest(&der)))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve())
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
