//! Error types for OKP key operations

use thiserror::Error;

/// Input-validation failures raised at the codec and signing boundaries.
///
/// All variants are caller-recoverable: no partial key is ever returned
/// alongside an error. A signature that merely fails to verify is a normal
/// `false` result, not an error.
#[derive(Error, Debug)]
pub enum OkpError {
    #[error("Invalid OKP JWK: {0}")]
    InvalidKeyFormat(String),

    #[error("Secret must be exactly {expected} bytes, got {got}")]
    InvalidSecretLength { expected: usize, got: usize },

    #[error("Unrecognized OpenSSH key type: {0}")]
    UnrecognizedKeyType(String),

    #[error("Signing not supported for public keys")]
    SigningNotSupported,

    #[error("Public key cannot be exported as an OpenSSH private key")]
    PublicKeyCannotExport,

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, OkpError>;
