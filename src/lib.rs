//! `fips202` implements the Keccak-f\[1600\] permutation and the SHA-3 / SHAKE sponge construction
//! standardized in [FIPS 202], from first principles.
//!
//! # Overview
//!
//! The library provides:
//!
//! - the fixed-length hash functions SHA3-224, SHA3-256, SHA3-384, SHA3-512;
//! - the extensible output functions (XOF) SHAKE128 and SHAKE256, producing streams of arbitrary length.
//!
//! One-shot functions select the variant from the size of the output buffer (for SHA-3)
//! or from the security level in bits (for SHAKE):
//!
//! ```
//! let mut digest = [0u8; 32];
//! fips202::hash(b"", &mut digest).unwrap();
//! assert_eq!(
//!     hex::encode(digest),
//!     "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
//! );
//!
//! // SHAKE output can be of any length.
//! let mut output = [0u8; 32];
//! fips202::shake(128, b"", &mut output).unwrap();
//! assert_eq!(
//!     hex::encode(output),
//!     "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26"
//! );
//! ```
//!
//! # Streaming
//!
//! A [`ShakeStream`] absorbs input in any number of writes, and, once finished, squeezes
//! output in any number of reads. Calls out of order are rejected with [`InvalidState`]:
//!
//! ```
//! use fips202::{SecurityLevel, ShakeStream};
//!
//! let mut stream = ShakeStream::new(SecurityLevel::Shake256);
//! stream.write(b"yellow ").unwrap();
//! stream.write(b"submarine").unwrap();
//! assert!(stream.read(&mut [0u8; 8]).is_err());
//!
//! stream.finish().unwrap();
//! let mut challenge = [0u8; 8];
//! stream.read(&mut challenge).unwrap();
//! assert!(stream.write(b"too late").is_err());
//! ```
//!
//! The lower-level [`hash::Sponge`] exposes the same operations together with its internal cursor,
//! and the hasher types ([`Sha3_256`], [`Shake128`], ...) plug into the [`digest`] ecosystem.
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

/// Built-in errors.
mod errors;
/// The permutation, state and sponge construction.
pub mod hash;
/// Hashers for the [`digest`] traits.
mod hashers;
/// One-shot entry points.
mod oneshot;
/// Two-phase byte stream.
mod stream;
/// Traits for byte support.
pub mod traits;
/// SHA-3 and SHAKE parameters.
mod variant;

pub use errors::{HashError, HashResult, InvalidState};
pub use hash::{keccak_f1600, KeccakState, Phase, Sponge};
pub use hashers::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256, ShakeReader};
pub use oneshot::{
    hash, hash_segmented, sha3_224, sha3_256, sha3_384, sha3_512, shake, shake128, shake256,
    shake_segmented,
};
pub use stream::ShakeStream;
pub use traits::*;
pub use variant::{SecurityLevel, Sha3Variant, SHA3_SUFFIX, SHAKE_SUFFIX};
