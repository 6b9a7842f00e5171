//! Ed448 curve operations via `ed448-goldilocks`

use ed448_goldilocks::elliptic_curve::Generate;
use ed448_goldilocks::{SecretKey, Signature, SigningKey, VerifyingKey};

use crate::{EdwardsCurve, KtyOkp, OkpError, error::Result};

/// The Ed448 (RFC 8032 §5.2) curve variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ed448;

pub type KtyOkpEd448 = KtyOkp<Ed448>;

fn signing_key(secret_key: &[u8]) -> Result<SigningKey> {
    if secret_key.len() != Ed448::SK_BYTES {
        return Err(OkpError::InvalidKeyFormat(format!(
            "Ed448 secret key must be {} bytes, got {}",
            Ed448::SK_BYTES,
            secret_key.len()
        )));
    }
    let mut seed = [0u8; 57];
    seed.copy_from_slice(&secret_key[..Ed448::SECRET_BYTES]);
    Ok(SigningKey::from(&SecretKey::from(seed)))
}

impl EdwardsCurve for Ed448 {
    const NAME: &'static str = "Ed448";
    const SSH_TYPE: &'static str = "ssh-ed448";
    const SECRET_BYTES: usize = 57;
    const PK_BYTES: usize = 57;

    fn keypair(secret: Option<&[u8]>) -> Result<(Vec<u8>, Vec<u8>)> {
        let signing_key = match secret {
            Some(bytes) => {
                let seed: [u8; 57] =
                    bytes
                        .try_into()
                        .map_err(|_| OkpError::InvalidSecretLength {
                            expected: Self::SECRET_BYTES,
                            got: bytes.len(),
                        })?;
                SigningKey::from(&SecretKey::from(seed))
            }
            None => SigningKey::generate(),
        };

        Ok((
            signing_key.to_bytes().to_vec(),
            signing_key.verifying_key().to_bytes().to_vec(),
        ))
    }

    fn sign(message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
        let signature = signing_key(secret_key)?.sign_raw(message);
        Ok(signature.to_bytes().to_vec())
    }

    fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
        let Ok(point_bytes) = <[u8; 57]>::try_from(public_key) else {
            return false;
        };
        let Ok(verifying_key) = VerifyingKey::from_bytes(&point_bytes) else {
            return false;
        };
        let Ok(signature) = Signature::try_from(signature) else {
            return false;
        };
        verifying_key.verify_raw(&signature, message).is_ok()
    }

    fn secret_to_public(secret_key: &[u8]) -> Result<Vec<u8>> {
        Ok(signing_key(secret_key)?.verifying_key().to_bytes().to_vec())
    }
}
