//! JWK map encoding and decoding for OKP keys

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use serde_json::Value;
use tracing::debug;
use zeroize::Zeroizing;

use crate::{EdwardsCurve, KtyOkp, OkpError, error::Result};

/// An insertion-ordered JWK field map.
///
/// Field order is observable in serialized JSON and is treated as part of
/// the encoding contract, so the `preserve_order` map backend is required.
pub type Fields = serde_json::Map<String, Value>;

impl<C: EdwardsCurve> KtyOkp<C> {
    /// Decodes a JWK field map into a key record.
    ///
    /// Requires `kty: "OKP"`, the matching `crv`, and an `x` that decodes to
    /// exactly `PK_BYTES`. A `d` string, when present, must decode to exactly
    /// `SECRET_BYTES` and yields a secret-bearing record. Returns the record
    /// together with the remaining fields: consumed keys removed, everything
    /// else passed through in its original relative order.
    pub fn from_map(fields: &Fields) -> Result<(Self, Fields)> {
        if fields.get("kty").and_then(Value::as_str) != Some("OKP") {
            return Err(OkpError::InvalidKeyFormat("'kty' must be \"OKP\"".into()));
        }
        if fields.get("crv").and_then(Value::as_str) != Some(C::NAME) {
            return Err(OkpError::InvalidKeyFormat(format!(
                "'crv' must be \"{}\"",
                C::NAME
            )));
        }
        let x = fields
            .get("x")
            .and_then(Value::as_str)
            .ok_or_else(|| OkpError::InvalidKeyFormat("'x' must be a string".into()))?;
        let pk = BASE64_URL_SAFE_NO_PAD
            .decode(x)
            .map_err(|e| OkpError::InvalidKeyFormat(format!("'x' isn't valid base64url: {e}")))?;
        if pk.len() != C::PK_BYTES {
            return Err(OkpError::InvalidKeyFormat(format!(
                "'x' must decode to {} bytes, got {}",
                C::PK_BYTES,
                pk.len()
            )));
        }

        // A non-string `d` is not ours to interpret; it passes through like
        // any other foreign field.
        let secret = match fields.get("d").and_then(Value::as_str) {
            Some(d) => {
                let secret = Zeroizing::new(BASE64_URL_SAFE_NO_PAD.decode(d).map_err(|e| {
                    OkpError::InvalidKeyFormat(format!("'d' isn't valid base64url: {e}"))
                })?);
                if secret.len() != C::SECRET_BYTES {
                    return Err(OkpError::InvalidKeyFormat(format!(
                        "'d' must decode to {} bytes, got {}",
                        C::SECRET_BYTES,
                        secret.len()
                    )));
                }
                Some(secret)
            }
            None => None,
        };

        let mut remaining = fields.clone();
        remaining.shift_remove("kty");
        remaining.shift_remove("crv");
        remaining.shift_remove("x");

        let key = match secret {
            Some(secret) => {
                remaining.shift_remove("d");
                Self::from_parts(&secret, &pk)
            }
            None => Self::from_okp(&pk)?,
        };

        debug!("Decoded {} OKP JWK", C::NAME);
        Ok((key, remaining))
    }

    /// Encodes this record into a JWK field map.
    ///
    /// Inserts `crv`, `d` (secret-bearing records only), `kty` and `x` ahead
    /// of the given fields; the given fields keep their relative order.
    pub fn to_map(&self, fields: &Fields) -> Fields {
        let mut map = Fields::new();
        map.insert("crv".into(), Value::String(C::NAME.into()));
        if let Some(secret) = self.secret_bytes() {
            map.insert(
                "d".into(),
                Value::String(BASE64_URL_SAFE_NO_PAD.encode(secret)),
            );
        }
        map.insert("kty".into(), Value::String("OKP".into()));
        map.insert(
            "x".into(),
            Value::String(BASE64_URL_SAFE_NO_PAD.encode(self.public_bytes())),
        );
        for (k, v) in fields {
            if !map.contains_key(k) {
                map.insert(k.clone(), v.clone());
            }
        }
        map
    }

    /// Encodes the public half only; `d` is omitted even when this record
    /// carries a secret.
    pub fn to_public_map(&self, fields: &Fields) -> Fields {
        let mut map = self.to_map(fields);
        map.shift_remove("d");
        map
    }

    /// The canonical thumbprint input: exactly `{crv, kty, x}` in lexical
    /// order, never the secret.
    pub fn to_thumbprint_map(&self, fields: &Fields) -> Fields {
        let full = self.to_public_map(fields);
        let mut map = Fields::new();
        for k in ["crv", "kty", "x"] {
            if let Some(v) = full.get(k) {
                map.insert(k.into(), v.clone());
            }
        }
        map
    }
}
