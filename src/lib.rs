//! # ec_keytool
//!
//! NIST elliptic-curve private key generation and public key derivation,
//! serialized as PEM.
//!
//! ## Architecture
//!
//! - `crypto`: Curves, key material, and PEM encoding
//! - `worker`: Parallel batch generation
//! - `config`: Command-line configuration
//! - `output`: Key file input and output

pub mod config;
pub mod crypto;
pub mod output;
pub mod worker;

pub use config::{Command, Config};
pub use crypto::{derive_public_key, generate_key, Curve, KeyError, PrivateKey};
pub use worker::{generate_batch, BatchError};
