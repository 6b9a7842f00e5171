//! Curve descriptor trait shared by both OKP variants

use crate::error::Result;

/// Compile-time constants and curve operations for one Edwards-curve variant.
///
/// The two variants (Ed25519ph, Ed448) are structurally identical and differ
/// only in these constants and in which curve library backs the four
/// operations. All byte lengths are fixed facts of the curve, never runtime
/// parameters.
pub trait EdwardsCurve {
    /// JWK `crv` value and canonical algorithm identifier
    const NAME: &'static str;

    /// OpenSSH key type string
    const SSH_TYPE: &'static str;

    /// Length of the secret scalar seed
    const SECRET_BYTES: usize;

    /// Length of the compressed public key
    const PK_BYTES: usize;

    /// Length of the full secret key, laid out as `secret ++ public`
    const SK_BYTES: usize = Self::SECRET_BYTES + Self::PK_BYTES;

    /// Generates a key pair, or derives one from a `SECRET_BYTES` seed.
    ///
    /// Returns `(secret, public)` raw bytes.
    fn keypair(secret: Option<&[u8]>) -> Result<(Vec<u8>, Vec<u8>)>;

    /// Signs a message with a full `SK_BYTES` secret key.
    fn sign(message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>>;

    /// Verifies a signature against a `PK_BYTES` public key.
    ///
    /// A malformed or non-matching signature is `false`, never an error.
    fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> bool;

    /// Derives the public key from a full `SK_BYTES` secret key.
    fn secret_to_public(secret_key: &[u8]) -> Result<Vec<u8>>;
}
