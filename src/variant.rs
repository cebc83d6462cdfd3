use crate::errors::{HashError, HashResult};
use crate::hash::state::WIDTH;

/// Domain separation suffix of the SHA-3 hash functions (bits `01`, followed by the first padding bit).
pub const SHA3_SUFFIX: u8 = 0x06;
/// Domain separation suffix of the SHAKE extensible output functions (bits `1111`, followed by the first padding bit).
pub const SHAKE_SUFFIX: u8 = 0x1f;

/// The fixed-length hash functions of FIPS 202.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sha3Variant {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl Sha3Variant {
    /// All variants, by increasing digest length.
    pub const ALL: [Sha3Variant; 4] = [
        Sha3Variant::Sha3_224,
        Sha3Variant::Sha3_256,
        Sha3Variant::Sha3_384,
        Sha3Variant::Sha3_512,
    ];

    /// Digest length, in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha3_224 => 28,
            Self::Sha3_256 => 32,
            Self::Sha3_384 => 48,
            Self::Sha3_512 => 64,
        }
    }

    /// Rate of the underlying sponge, in bytes.
    pub const fn rate(self) -> usize {
        WIDTH - 2 * self.output_len()
    }

    /// The variant producing digests of `len` bytes.
    pub fn from_output_len(len: usize) -> HashResult<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.output_len() == len)
            .ok_or(HashError::InvalidOutputLength(len))
    }
}

/// The security levels of the SHAKE extensible output functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecurityLevel {
    /// SHAKE128.
    Shake128,
    /// SHAKE256.
    Shake256,
}

impl SecurityLevel {
    /// Security level, in bits.
    pub const fn bits(self) -> usize {
        match self {
            Self::Shake128 => 128,
            Self::Shake256 => 256,
        }
    }

    /// Security parameter, in bytes.
    /// The capacity of the sponge is twice as much.
    pub const fn param_len(self) -> usize {
        self.bits() / 8
    }

    /// Rate of the underlying sponge, in bytes.
    pub const fn rate(self) -> usize {
        WIDTH - 2 * self.param_len()
    }

    /// The level offering `bits` (128 or 256) bits of security.
    pub fn from_bits(bits: usize) -> HashResult<Self> {
        match bits {
            128 => Ok(Self::Shake128),
            256 => Ok(Self::Shake256),
            _ => Err(HashError::InvalidSecurityLevel(bits)),
        }
    }
}
