//! The raw OKP key record

use std::{fmt, marker::PhantomData};

use zeroize::Zeroizing;

use crate::{EdwardsCurve, OkpError, error::Result};

/// An Edwards-curve key: either a bare public key (`PK_BYTES`) or a full
/// secret key (`SK_BYTES`, laid out as `secret ++ public`).
///
/// Any other byte length is rejected at construction. The buffer is zeroed
/// when the record is dropped. A record never changes shape in place: going
/// from public-only to secret-bearing always constructs a fresh record.
pub struct KtyOkp<C: EdwardsCurve> {
    okp: Zeroizing<Vec<u8>>,
    _curve: PhantomData<C>,
}

impl<C: EdwardsCurve> KtyOkp<C> {
    /// Creates a record from raw curve bytes.
    ///
    /// `bytes` must be exactly `PK_BYTES` (public-only) or `SK_BYTES`
    /// (secret-bearing).
    pub fn from_okp(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != C::PK_BYTES && bytes.len() != C::SK_BYTES {
            return Err(OkpError::InvalidKeyFormat(format!(
                "{} okp must be {} or {} bytes, got {}",
                C::NAME,
                C::PK_BYTES,
                C::SK_BYTES,
                bytes.len()
            )));
        }
        Ok(Self {
            okp: Zeroizing::new(bytes.to_vec()),
            _curve: PhantomData,
        })
    }

    /// Assembles a secret-bearing record from already-validated parts.
    pub(crate) fn from_parts(secret: &[u8], public: &[u8]) -> Self {
        let mut okp = Zeroizing::new(Vec::with_capacity(secret.len() + public.len()));
        okp.extend_from_slice(secret);
        okp.extend_from_slice(public);
        Self {
            okp,
            _curve: PhantomData,
        }
    }

    /// Raw curve bytes, `secret ++ public` when secret-bearing
    pub fn as_bytes(&self) -> &[u8] {
        &self.okp
    }

    pub fn is_public_only(&self) -> bool {
        self.okp.len() == C::PK_BYTES
    }

    pub fn is_secret_bearing(&self) -> bool {
        self.okp.len() == C::SK_BYTES
    }

    /// The secret seed, if this record carries one
    pub fn secret_bytes(&self) -> Option<&[u8]> {
        if self.is_secret_bearing() {
            Some(&self.okp[..C::SECRET_BYTES])
        } else {
            None
        }
    }

    /// The public key bytes, whichever shape the record has
    pub fn public_bytes(&self) -> &[u8] {
        if self.is_secret_bearing() {
            &self.okp[C::SECRET_BYTES..]
        } else {
            &self.okp
        }
    }
}

impl<C: EdwardsCurve> Clone for KtyOkp<C> {
    fn clone(&self) -> Self {
        Self {
            okp: Zeroizing::new(self.okp.to_vec()),
            _curve: PhantomData,
        }
    }
}

impl<C: EdwardsCurve> PartialEq for KtyOkp<C> {
    fn eq(&self, other: &Self) -> bool {
        self.okp[..] == other.okp[..]
    }
}

impl<C: EdwardsCurve> Eq for KtyOkp<C> {}

// Secret bytes stay out of Debug output
impl<C: EdwardsCurve> fmt::Debug for KtyOkp<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("KtyOkp")
            .field("crv", &C::NAME)
            .field(
                "shape",
                &if self.is_secret_bearing() {
                    "secret"
                } else {
                    "public"
                },
            )
            .finish()
    }
}
