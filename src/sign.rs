//! Key generation, signing and verification dispatch

use serde_json::Value;

use crate::{
    EdwardsCurve, KtyOkp, OkpError,
    error::Result,
    map::Fields,
};

fn algorithm_override(fields: Option<&Fields>) -> Option<&str> {
    let fields = fields?;
    if fields.get("use").and_then(Value::as_str) != Some("sig") {
        return None;
    }
    fields.get("alg").and_then(Value::as_str)
}

impl<C: EdwardsCurve> KtyOkp<C> {
    /// Generates a fresh key pair, or derives one from a `SECRET_BYTES` seed.
    ///
    /// The returned record is always secret-bearing.
    pub fn generate(secret: Option<&[u8]>) -> Result<(Self, Fields)> {
        if let Some(secret) = secret {
            if secret.len() != C::SECRET_BYTES {
                return Err(OkpError::InvalidSecretLength {
                    expected: C::SECRET_BYTES,
                    got: secret.len(),
                });
            }
        }
        let (secret, public) = C::keypair(secret)?;
        Ok((Self::from_parts(&secret, &public), Fields::new()))
    }

    /// Signs a message. Only secret-bearing records can sign; `alg` must be
    /// the curve's own algorithm identifier.
    pub fn sign(&self, message: &[u8], alg: &str) -> Result<Vec<u8>> {
        if alg != C::NAME {
            return Err(OkpError::UnsupportedAlgorithm(alg.to_string()));
        }
        if !self.is_secret_bearing() {
            return Err(OkpError::SigningNotSupported);
        }
        C::sign(message, self.as_bytes())
    }

    /// Verifies a signature against this key's public half.
    ///
    /// A secret-bearing record verifies through its derived public key, not
    /// the stored buffer. A non-matching or malformed signature is `Ok(false)`.
    pub fn verify(&self, message: &[u8], alg: &str, signature: &[u8]) -> Result<bool> {
        if alg != C::NAME {
            return Err(OkpError::UnsupportedAlgorithm(alg.to_string()));
        }
        let derived;
        let public = if self.is_secret_bearing() {
            derived = C::secret_to_public(self.as_bytes())?;
            derived.as_slice()
        } else {
            self.as_bytes()
        };
        Ok(C::verify(signature, message, public))
    }

    /// Picks the signing algorithm: a `use: "sig"` / `alg` pair in the
    /// fields is echoed back untouched, otherwise the curve's canonical
    /// identifier. Public-only records cannot sign.
    pub fn signing_algorithm(&self, fields: Option<&Fields>) -> Result<String> {
        if !self.is_secret_bearing() {
            return Err(OkpError::SigningNotSupported);
        }
        match algorithm_override(fields) {
            Some(alg) => Ok(alg.to_string()),
            None => Ok(C::NAME.to_string()),
        }
    }

    /// Picks the acceptable verification algorithms, with the same `use` /
    /// `alg` precedence as [`signing_algorithm`](Self::signing_algorithm).
    /// Always exactly one entry.
    pub fn verifying_algorithms(fields: Option<&Fields>) -> Vec<String> {
        match algorithm_override(fields) {
            Some(alg) => vec![alg.to_string()],
            None => vec![C::NAME.to_string()],
        }
    }
}

#[cfg(test)]
#[cfg(feature = "ed25519ph")]
mod tests {
    use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
    use serde_json::json;

    use crate::{Ed25519ph, KtyOkp, KtyOkpEd25519ph, OkpError, map::Fields};

    fn fields(value: serde_json::Value) -> Fields {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn generate_returns_secret_bearing_record() {
        let (key, extra) = KtyOkpEd25519ph::generate(None).unwrap();
        assert!(key.is_secret_bearing());
        assert_eq!(key.as_bytes().len(), 64);
        assert!(extra.is_empty());
    }

    #[test]
    fn generate_from_seed_is_deterministic() {
        let seed = BASE64_URL_SAFE_NO_PAD
            .decode("X20biMbNG8QUQDnBv4RrZzkS3Civfc2zWHcDkeUeS9g")
            .unwrap();

        let (key, _) = KtyOkpEd25519ph::generate(Some(&seed)).unwrap();

        assert_eq!(key.secret_bytes().unwrap(), seed.as_slice());
        assert_eq!(
            key.public_bytes(),
            BASE64_URL_SAFE_NO_PAD
                .decode("yb2ttOBWPH2qO-oTrFGs8mgw3cu0nCfjnPt-q9dag7E")
                .unwrap()
        );
    }

    #[test]
    fn generate_rejects_bad_seed_lengths() {
        for len in [0usize, 31, 33, 64] {
            let err = KtyOkpEd25519ph::generate(Some(&vec![0u8; len])).unwrap_err();
            assert!(matches!(err, OkpError::InvalidSecretLength { .. }));
        }
    }

    #[test]
    fn sign_verify_round_trip() {
        let (key, _) = KtyOkpEd25519ph::generate(None).unwrap();
        let message = b"test message";

        let signature = key.sign(message, "Ed25519ph").unwrap();
        assert!(key.verify(message, "Ed25519ph", &signature).unwrap());
        assert!(!key.verify(b"other message", "Ed25519ph", &signature).unwrap());
    }

    #[test]
    fn tampered_signature_is_false_not_error() {
        let (key, _) = KtyOkpEd25519ph::generate(None).unwrap();
        let message = b"test message";

        let mut signature = key.sign(message, "Ed25519ph").unwrap();
        signature[0] ^= 0x01;
        assert!(!key.verify(message, "Ed25519ph", &signature).unwrap());

        // wrong length entirely
        assert!(!key.verify(message, "Ed25519ph", &[0u8; 12]).unwrap());
    }

    #[test]
    fn public_only_verifies_but_cannot_sign() {
        let (key, _) = KtyOkpEd25519ph::generate(None).unwrap();
        let signature = key.sign(b"msg", "Ed25519ph").unwrap();

        let public = KtyOkp::<Ed25519ph>::from_okp(key.public_bytes()).unwrap();
        assert!(public.verify(b"msg", "Ed25519ph", &signature).unwrap());

        let err = public.sign(b"msg", "Ed25519ph").unwrap_err();
        assert!(matches!(err, OkpError::SigningNotSupported));
    }

    #[test]
    fn foreign_algorithm_is_rejected() {
        let (key, _) = KtyOkpEd25519ph::generate(None).unwrap();

        let err = key.sign(b"msg", "Ed448").unwrap_err();
        assert!(matches!(err, OkpError::UnsupportedAlgorithm(_)));

        let err = key.verify(b"msg", "EdDSA", &[0u8; 64]).unwrap_err();
        assert!(matches!(err, OkpError::UnsupportedAlgorithm(_)));
    }

    #[test]
    fn signing_algorithm_precedence() {
        let (key, _) = KtyOkpEd25519ph::generate(None).unwrap();

        assert_eq!(key.signing_algorithm(None).unwrap(), "Ed25519ph");

        // `alg` is echoed back only alongside `use: "sig"`
        let with_alg = fields(json!({"use": "sig", "alg": "EdDSA"}));
        assert_eq!(key.signing_algorithm(Some(&with_alg)).unwrap(), "EdDSA");

        let wrong_use = fields(json!({"use": "enc", "alg": "EdDSA"}));
        assert_eq!(key.signing_algorithm(Some(&wrong_use)).unwrap(), "Ed25519ph");

        let public = KtyOkp::<Ed25519ph>::from_okp(key.public_bytes()).unwrap();
        assert!(matches!(
            public.signing_algorithm(None).unwrap_err(),
            OkpError::SigningNotSupported
        ));
    }

    #[test]
    fn verifying_algorithms_precedence() {
        assert_eq!(
            KtyOkpEd25519ph::verifying_algorithms(None),
            vec!["Ed25519ph".to_string()]
        );

        let with_alg = fields(json!({"use": "sig", "alg": "EdDSA"}));
        assert_eq!(
            KtyOkpEd25519ph::verifying_algorithms(Some(&with_alg)),
            vec!["EdDSA".to_string()]
        );
    }
}
