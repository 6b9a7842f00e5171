//! Edwards-curve OKP JWK key types
//!
//! This crate provides:
//! - `kty: "OKP"` JWK map encoding/decoding for Ed25519ph and Ed448
//! - EdDSA signing and verification dispatched through the [`EdwardsCurve`] trait
//! - OpenSSH private key interchange (`openssh-key-v1` container)
//!
//! Both curve variants share one generic key type, [`KtyOkp`], parameterized
//! by the curve marker. Curve arithmetic itself lives behind the
//! [`EdwardsCurve`] trait so the codecs stay free of any curve library.

pub mod curve;
mod error;
mod map;
mod okp;
pub mod openssh;
mod sign;

#[cfg(feature = "ed25519ph")]
pub mod ed25519ph;

#[cfg(feature = "ed448")]
pub mod ed448;

pub use curve::EdwardsCurve;
pub use error::{OkpError, Result};
pub use map::Fields;
pub use okp::KtyOkp;

#[cfg(feature = "ed25519ph")]
pub use ed25519ph::{Ed25519ph, KtyOkpEd25519ph};

#[cfg(feature = "ed448")]
pub use ed448::{Ed448, KtyOkpEd448};
