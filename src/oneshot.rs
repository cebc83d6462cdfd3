//! One-shot hashing of a whole input.
//!
//! Input can be given either as a single contiguous slice,
//! or as a sequence of segments (e.g. the pages of a buffer too large to be held in one allocation).
//! Both forms produce the same output for the same bytes.
use crate::errors::HashResult;
use crate::hash::Sponge;
use crate::variant::{SecurityLevel, Sha3Variant, SHA3_SUFFIX, SHAKE_SUFFIX};

/// Hashes `input` with the SHA-3 variant selected by `output.len()` (28, 32, 48 or 64 bytes),
/// writing the digest into `output`.
///
/// ```
/// let mut digest = [0u8; 32];
/// fips202::hash(b"abc", &mut digest).unwrap();
/// assert_eq!(
///     hex::encode(digest),
///     "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
/// );
/// ```
pub fn hash(input: &[u8], output: &mut [u8]) -> HashResult<()> {
    hash_segmented([input], output)
}

/// Like [`hash`], with the input given as a sequence of segments.
pub fn hash_segmented<I>(segments: I, output: &mut [u8]) -> HashResult<()>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let variant = Sha3Variant::from_output_len(output.len())?;
    let mut sponge = Sponge::sha3(variant);
    for segment in segments {
        sponge.absorb(segment.as_ref())?;
    }
    sponge.finalize_digest(output)
}

/// Fills `output` with the SHAKE output of `input` at the security level of `bits` (128 or 256).
/// The length of `output` is arbitrary.
pub fn shake(bits: usize, input: &[u8], output: &mut [u8]) -> HashResult<()> {
    shake_segmented(bits, [input], output)
}

/// Like [`shake`], with the input given as a sequence of segments.
pub fn shake_segmented<I>(bits: usize, segments: I, output: &mut [u8]) -> HashResult<()>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut sponge = Sponge::shake(SecurityLevel::from_bits(bits)?);
    for segment in segments {
        sponge.absorb(segment.as_ref())?;
    }
    sponge.finalize_xof()?;
    sponge.squeeze(output)?;
    Ok(())
}

fn sha3_fixed<const N: usize>(variant: Sha3Variant, input: &[u8]) -> [u8; N] {
    debug_assert_eq!(variant.output_len(), N);
    let mut sponge = Sponge::sha3(variant);
    let state = sponge
        .absorb_unchecked(input)
        .pad_unchecked(SHA3_SUFFIX)
        .state();
    let mut output = [0u8; N];
    output.copy_from_slice(&state.as_bytes()[..N]);
    output
}

/// SHA3-224(input) -> 28 bytes.
pub fn sha3_224(input: impl AsRef<[u8]>) -> [u8; 28] {
    sha3_fixed(Sha3Variant::Sha3_224, input.as_ref())
}

/// SHA3-256(input) -> 32 bytes.
pub fn sha3_256(input: impl AsRef<[u8]>) -> [u8; 32] {
    sha3_fixed(Sha3Variant::Sha3_256, input.as_ref())
}

/// SHA3-384(input) -> 48 bytes.
pub fn sha3_384(input: impl AsRef<[u8]>) -> [u8; 48] {
    sha3_fixed(Sha3Variant::Sha3_384, input.as_ref())
}

/// SHA3-512(input) -> 64 bytes.
pub fn sha3_512(input: impl AsRef<[u8]>) -> [u8; 64] {
    sha3_fixed(Sha3Variant::Sha3_512, input.as_ref())
}

fn shake_fill(level: SecurityLevel, input: &[u8], output: &mut [u8]) {
    let mut sponge = Sponge::shake(level);
    sponge
        .absorb_unchecked(input)
        .pad_unchecked(SHAKE_SUFFIX)
        .squeeze_unchecked(output);
}

/// Fills `output` with SHAKE128(input).
pub fn shake128(input: impl AsRef<[u8]>, output: &mut [u8]) {
    shake_fill(SecurityLevel::Shake128, input.as_ref(), output)
}

/// Fills `output` with SHAKE256(input).
pub fn shake256(input: impl AsRef<[u8]>, output: &mut [u8]) {
    shake_fill(SecurityLevel::Shake256, input.as_ref(), output)
}
