//! Ed25519ph curve operations via `ed25519-dalek`

use ed25519_dalek::{Signature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha512};

use crate::{EdwardsCurve, KtyOkp, OkpError, error::Result};

/// The Ed25519ph (prehashed, RFC 8032 §5.1) curve variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ed25519ph;

pub type KtyOkpEd25519ph = KtyOkp<Ed25519ph>;

fn signing_key(secret_key: &[u8]) -> Result<SigningKey> {
    if secret_key.len() != Ed25519ph::SK_BYTES {
        return Err(OkpError::InvalidKeyFormat(format!(
            "Ed25519ph secret key must be {} bytes, got {}",
            Ed25519ph::SK_BYTES,
            secret_key.len()
        )));
    }
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&secret_key[..Ed25519ph::SECRET_BYTES]);
    Ok(SigningKey::from_bytes(&seed))
}

impl EdwardsCurve for Ed25519ph {
    const NAME: &'static str = "Ed25519ph";
    const SSH_TYPE: &'static str = "ssh-ed25519ph";
    const SECRET_BYTES: usize = 32;
    const PK_BYTES: usize = 32;

    fn keypair(secret: Option<&[u8]>) -> Result<(Vec<u8>, Vec<u8>)> {
        let signing_key = match secret {
            Some(bytes) => {
                let seed: [u8; 32] =
                    bytes
                        .try_into()
                        .map_err(|_| OkpError::InvalidSecretLength {
                            expected: Self::SECRET_BYTES,
                            got: bytes.len(),
                        })?;
                SigningKey::from_bytes(&seed)
            }
            None => SigningKey::generate(&mut OsRng),
        };

        Ok((
            signing_key.to_bytes().to_vec(),
            signing_key.verifying_key().to_bytes().to_vec(),
        ))
    }

    fn sign(message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
        let signing_key = signing_key(secret_key)?;
        let mut prehashed = Sha512::new();
        prehashed.update(message);
        let signature = signing_key
            .sign_prehashed(prehashed, None)
            .map_err(|e| OkpError::InvalidKeyFormat(format!("Ed25519ph signing failed: {e}")))?;
        Ok(signature.to_bytes().to_vec())
    }

    fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
        let Ok(verifying_key) = VerifyingKey::try_from(public_key) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(signature) else {
            return false;
        };
        let mut prehashed = Sha512::new();
        prehashed.update(message);
        verifying_key
            .verify_prehashed(prehashed, None, &signature)
            .is_ok()
    }

    fn secret_to_public(secret_key: &[u8]) -> Result<Vec<u8>> {
        Ok(signing_key(secret_key)?.verifying_key().to_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypair_layout() {
        let (secret, public) = Ed25519ph::keypair(None).unwrap();
        assert_eq!(secret.len(), 32);
        assert_eq!(public.len(), 32);
    }

    #[test]
    fn secret_to_public_matches_keypair() {
        let (secret, public) = Ed25519ph::keypair(None).unwrap();
        let mut sk = secret.clone();
        sk.extend_from_slice(&public);

        assert_eq!(Ed25519ph::secret_to_public(&sk).unwrap(), public);
    }

    #[test]
    fn partial_secret_buffers_are_rejected() {
        for len in [0usize, 32, 40, 63, 65] {
            assert!(
                Ed25519ph::sign(b"abc", &vec![0u8; len]).is_err(),
                "length {len} should not sign"
            );
            assert!(Ed25519ph::secret_to_public(&vec![0u8; len]).is_err());
        }
    }

    #[test]
    fn prehashed_signature_round_trip() {
        let (secret, public) = Ed25519ph::keypair(None).unwrap();
        let mut sk = secret.clone();
        sk.extend_from_slice(&public);

        let signature = Ed25519ph::sign(b"abc", &sk).unwrap();
        assert_eq!(signature.len(), 64);
        assert!(Ed25519ph::verify(&signature, b"abc", &public));
        assert!(!Ed25519ph::verify(&signature, b"abd", &public));
    }
}
