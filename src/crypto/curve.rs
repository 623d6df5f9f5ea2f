//! Supported NIST curves.

use std::fmt;
use std::str::FromStr;

use elliptic_curve::pkcs8::{AssociatedOid, ObjectIdentifier};

use super::KeyError;

/// A named NIST prime-field curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// secp224r1
    P224,
    /// prime256v1 / secp256r1
    P256,
    /// secp384r1
    P384,
    /// secp521r1
    P521,
}

impl Curve {
    /// Every supported curve, smallest first.
    pub const ALL: [Curve; 4] = [Curve::P224, Curve::P256, Curve::P384, Curve::P521];

    /// Returns the canonical token, e.g. `"P-256"`.
    pub const fn name(self) -> &'static str {
        match self {
            Curve::P224 => "P-224",
            Curve::P256 => "P-256",
            Curve::P384 => "P-384",
            Curve::P521 => "P-521",
        }
    }

    /// Returns the field size in bits.
    pub const fn bits(self) -> usize {
        match self {
            Curve::P224 => 224,
            Curve::P256 => 256,
            Curve::P384 => 384,
            Curve::P521 => 521,
        }
    }

    /// Returns the named-curve object identifier.
    pub fn oid(self) -> ObjectIdentifier {
        match self {
            Curve::P224 => p224::NistP224::OID,
            Curve::P256 => p256::NistP256::OID,
            Curve::P384 => p384::NistP384::OID,
            Curve::P521 => p521::NistP521::OID,
        }
    }

    /// Looks up a curve by its named-curve object identifier.
    pub fn from_oid(oid: ObjectIdentifier) -> Option<Self> {
        Self::ALL.into_iter().find(|curve| curve.oid() == oid)
    }
}

impl FromStr for Curve {
    type Err = KeyError;

    /// Only the exact canonical tokens are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P-224" => Ok(Curve::P224),
            "P-256" => Ok(Curve::P256),
            "P-384" => Ok(Curve::P384),
            "P-521" => Ok(Curve::P521),
            _ => Err(KeyError::UnsupportedCurve(s.to_string())),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
