//! PEM container helpers shared by generation and derivation.

use elliptic_curve::pkcs8::LineEnding;
use elliptic_curve::zeroize::Zeroizing;
use sec1::der::SecretDocument;
use sec1::{EcParameters, EcPrivateKey};

use super::{Curve, KeyError};

/// Label of a SEC1 private key container.
pub const PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";

/// Label of a SubjectPublicKeyInfo container.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// Line ending used for every emitted document.
pub const LINE_ENDING: LineEnding = LineEnding::LF;

/// Encodes a SEC1 `ECPrivateKey` naming its curve as an `EC PRIVATE KEY`
/// container.
///
/// `secret` is the big-endian scalar padded to the field size and
/// `public_point` the uncompressed SEC1 point.
pub fn encode_private_key(
    curve: Curve,
    secret: &[u8],
    public_point: &[u8],
) -> Result<Zeroizing<String>, KeyError> {
    let key = EcPrivateKey {
        private_key: secret,
        parameters: Some(EcParameters::NamedCurve(curve.oid())),
        public_key: Some(public_point),
    };

    SecretDocument::encode_msg(&key)
        .and_then(|document| document.to_pem(PRIVATE_KEY_LABEL, LINE_ENDING))
        .map_err(|error| KeyError::Encode(error.to_string()))
}

/// Decodes an `EC PRIVATE KEY` container and identifies its curve.
///
/// The returned document holds the SEC1 DER payload and is wiped on drop.
pub fn decode_private_key(input: &[u8]) -> Result<(Curve, SecretDocument), KeyError> {
    if input.is_empty() {
        return Err(KeyError::MissingInput);
    }

    let text = std::str::from_utf8(input).map_err(|error| {
        tracing::debug!(%error, "private key is not valid UTF-8");
        KeyError::Parse("input is not UTF-8 text".into())
    })?;

    let (label, document) = SecretDocument::from_pem(text).map_err(|error| {
        tracing::debug!(%error, "malformed PEM container");
        KeyError::Parse(format!("malformed PEM container: {}", error))
    })?;

    if label != PRIVATE_KEY_LABEL {
        return Err(KeyError::Parse(format!(
            "unexpected PEM label {:?}, expected {:?}",
            label, PRIVATE_KEY_LABEL
        )));
    }

    let curve = named_curve(document.as_bytes())?;
    Ok((curve, document))
}

/// Reads the named-curve parameter from a SEC1 `ECPrivateKey`.
fn named_curve(der: &[u8]) -> Result<Curve, KeyError> {
    let key = EcPrivateKey::try_from(der).map_err(|error| {
        tracing::debug!(%error, "invalid SEC1 private key");
        KeyError::Parse(format!("invalid SEC1 private key: {}", error))
    })?;

    let oid = key
        .parameters
        .and_then(|params| params.named_curve())
        .ok_or_else(|| KeyError::Parse("private key does not name its curve".into()))?;

    Curve::from_oid(oid).ok_or_else(|| KeyError::Parse(format!("unsupported curve OID {}", oid)))
}
