//! Hasher types implementing the [`digest`] traits.
//!
//! The phase of the sponge is tracked by the type system here:
//! a [`Sha3_256`] can only absorb until it is consumed by finalization,
//! and a [`ShakeReader`] can only squeeze.
//!
//! ```
//! use digest::{Digest, ExtendableOutput, Update, XofReader};
//! use fips202::{Sha3_256, Shake256};
//!
//! let digest = Sha3_256::new().chain_update(b"abc").finalize();
//! assert_eq!(
//!     hex::encode(digest),
//!     "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
//! );
//!
//! let mut reader = Shake256::default().chain(b"abc").finalize_xof();
//! let mut output = [0u8; 8];
//! reader.read(&mut output);
//! assert_eq!(hex::encode(output), "483366601360a877");
//! ```
use digest::consts::{U28, U32, U48, U64};
use digest::{
    ExtendableOutput, ExtendableOutputReset, FixedOutput, FixedOutputReset, HashMarker, Output,
    OutputSizeUser, Reset, Update, XofReader,
};
use rand::{CryptoRng, RngCore};

use crate::hash::Sponge;
use crate::variant::{SecurityLevel, Sha3Variant, SHA3_SUFFIX, SHAKE_SUFFIX};

macro_rules! impl_sha3 {
    ($name:ident, $variant:expr, $size:ty, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone)]
        pub struct $name {
            sponge: Sponge,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    sponge: Sponge::sha3($variant),
                }
            }
        }

        impl HashMarker for $name {}

        impl OutputSizeUser for $name {
            type OutputSize = $size;
        }

        impl Update for $name {
            fn update(&mut self, data: &[u8]) {
                self.sponge.absorb_unchecked(data);
            }
        }

        impl FixedOutput for $name {
            fn finalize_into(mut self, out: &mut Output<Self>) {
                let len = out.len();
                let state = self.sponge.pad_unchecked(SHA3_SUFFIX).state();
                out.copy_from_slice(&state.as_bytes()[..len]);
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                *self = Self::default();
            }
        }

        impl FixedOutputReset for $name {
            fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
                let len = out.len();
                let state = self.sponge.pad_unchecked(SHA3_SUFFIX).state();
                out.copy_from_slice(&state.as_bytes()[..len]);
                Reset::reset(self);
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!(stringify!($name), " {{ .. }}"))
            }
        }
    };
}

impl_sha3!(Sha3_224, Sha3Variant::Sha3_224, U28, "SHA3-224 hasher.");
impl_sha3!(Sha3_256, Sha3Variant::Sha3_256, U32, "SHA3-256 hasher.");
impl_sha3!(Sha3_384, Sha3Variant::Sha3_384, U48, "SHA3-384 hasher.");
impl_sha3!(Sha3_512, Sha3Variant::Sha3_512, U64, "SHA3-512 hasher.");

macro_rules! impl_shake {
    ($name:ident, $level:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone)]
        pub struct $name {
            sponge: Sponge,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    sponge: Sponge::shake($level),
                }
            }
        }

        impl HashMarker for $name {}

        impl Update for $name {
            fn update(&mut self, data: &[u8]) {
                self.sponge.absorb_unchecked(data);
            }
        }

        impl ExtendableOutput for $name {
            type Reader = ShakeReader;

            fn finalize_xof(self) -> ShakeReader {
                let mut sponge = self.sponge;
                sponge.pad_unchecked(SHAKE_SUFFIX);
                ShakeReader { sponge }
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                *self = Self::default();
            }
        }

        impl ExtendableOutputReset for $name {
            fn finalize_xof_reset(&mut self) -> ShakeReader {
                core::mem::take(self).finalize_xof()
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!(stringify!($name), " {{ .. }}"))
            }
        }
    };
}

impl_shake!(Shake128, SecurityLevel::Shake128, "SHAKE128 hasher.");
impl_shake!(Shake256, SecurityLevel::Shake256, "SHAKE256 hasher.");

/// The output stream of a finalized [`Shake128`] or [`Shake256`].
///
/// The reader is also a deterministic, cryptographically secure random number generator
/// seeded by the absorbed input.
#[derive(Clone)]
pub struct ShakeReader {
    sponge: Sponge,
}

impl XofReader for ShakeReader {
    fn read(&mut self, buffer: &mut [u8]) {
        self.sponge.squeeze_unchecked(buffer);
    }
}

impl RngCore for ShakeReader {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(buf.as_mut());
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(buf.as_mut());
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.sponge.squeeze_unchecked(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.sponge.squeeze_unchecked(dest);
        Ok(())
    }
}

impl CryptoRng for ShakeReader {}

impl core::fmt::Debug for ShakeReader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ShakeReader {{ .. }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digest::Digest;
    use rand::Rng;

    /// Digests must match the `sha3` crate, including across block boundaries.
    #[test]
    fn test_sha3_against_reference() {
        let mut rng = rand::thread_rng();
        for len in [0, 1, 71, 72, 73, 103, 104, 135, 136, 137, 143, 144, 145, 500] {
            let mut input = vec![0u8; len];
            rng.fill(&mut input[..]);
            assert_eq!(
                Sha3_224::digest(&input)[..],
                sha3::Sha3_224::digest(&input)[..]
            );
            assert_eq!(
                Sha3_256::digest(&input)[..],
                sha3::Sha3_256::digest(&input)[..]
            );
            assert_eq!(
                Sha3_384::digest(&input)[..],
                sha3::Sha3_384::digest(&input)[..]
            );
            assert_eq!(
                Sha3_512::digest(&input)[..],
                sha3::Sha3_512::digest(&input)[..]
            );
        }
    }

    #[test]
    fn test_shake_against_reference() {
        let mut rng = rand::thread_rng();
        for len in [0, 1, 135, 136, 137, 167, 168, 169, 1000] {
            let mut input = vec![0u8; len];
            rng.fill(&mut input[..]);

            let mut ours = [0u8; 400];
            let mut reference = [0u8; 400];
            Shake128::default().chain(&input).finalize_xof_into(&mut ours);
            sha3::Shake128::default()
                .chain(&input)
                .finalize_xof_into(&mut reference);
            assert_eq!(ours, reference);

            Shake256::default().chain(&input).finalize_xof_into(&mut ours);
            sha3::Shake256::default()
                .chain(&input)
                .finalize_xof_into(&mut reference);
            assert_eq!(ours, reference);
        }
    }

    /// Both finalization paths fill the whole output buffer, for every digest size.
    #[test]
    fn test_fixed_output_fills_buffer() {
        let input = b"abc";
        let mut hasher = Sha3_224::default();
        Update::update(&mut hasher, input);
        assert_eq!(hasher.clone().finalize_fixed()[..], crate::sha3_224(input));
        assert_eq!(hasher.finalize_fixed_reset()[..], crate::sha3_224(input));

        let mut hasher = Sha3_256::default();
        Update::update(&mut hasher, input);
        assert_eq!(hasher.clone().finalize_fixed()[..], crate::sha3_256(input));
        assert_eq!(hasher.finalize_fixed_reset()[..], crate::sha3_256(input));

        let mut hasher = Sha3_384::default();
        Update::update(&mut hasher, input);
        assert_eq!(hasher.clone().finalize_fixed()[..], crate::sha3_384(input));
        assert_eq!(hasher.finalize_fixed_reset()[..], crate::sha3_384(input));

        let mut hasher = Sha3_512::default();
        Update::update(&mut hasher, input);
        assert_eq!(hasher.clone().finalize_fixed()[..], crate::sha3_512(input));
        assert_eq!(hasher.finalize_fixed_reset()[..], crate::sha3_512(input));
        // the reset hasher starts over from the empty input
        assert_eq!(hasher.finalize_fixed()[..], crate::sha3_512(b""));
    }

    #[test]
    fn test_reset() {
        let mut hasher = Sha3_256::new();
        Digest::update(&mut hasher, b"garbage");
        Digest::reset(&mut hasher);
        Digest::update(&mut hasher, b"abc");
        let first = hasher.finalize_reset();
        Digest::update(&mut hasher, b"abc");
        assert_eq!(first, hasher.finalize());

        let mut shake = Shake128::default();
        shake.update(b"abc");
        let mut first = [0u8; 32];
        shake.finalize_xof_reset().read(&mut first);
        let mut second = [0u8; 32];
        shake.finalize_xof().read(&mut second);
        let mut empty = [0u8; 32];
        Shake128::default().finalize_xof().read(&mut empty);
        assert_ne!(first, second);
        assert_eq!(second, empty);
    }

    #[test]
    fn test_rng_matches_stream() {
        let mut reader = Shake256::default().chain(b"seed").finalize_xof();
        let mut control = Shake256::default().chain(b"seed").finalize_xof();

        let mut expected = [0u8; 12];
        control.read(&mut expected);

        assert_eq!(reader.next_u32().to_le_bytes(), expected[..4]);
        assert_eq!(reader.next_u64().to_le_bytes(), expected[4..]);

        let mut rest = [0u8; 100];
        reader.fill_bytes(&mut rest[..40]);
        reader.try_fill_bytes(&mut rest[40..]).unwrap();
        let mut expected = [0u8; 100];
        control.read(&mut expected);
        assert_eq!(rest, expected);
    }
}
