use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::state::KeccakState;
use super::Permutation;
use crate::errors::{HashError, HashResult, InvalidState};
use crate::variant::{SecurityLevel, Sha3Variant, SHA3_SUFFIX, SHAKE_SUFFIX};

/// The last bit of the multi-rate padding `pad10*1`, set in the last byte of the rate.
const PAD_END: u8 = 0x80;

/// The phase of a [`Sponge`].
///
/// A sponge starts absorbing and moves forward exactly once:
/// to [`Phase::Squeezing`] when finalized as an extensible output function,
/// to [`Phase::Finalized`] when finalized as a fixed-length digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Input can be absorbed.
    Absorbing,
    /// Output can be squeezed, indefinitely.
    Squeezing,
    /// The digest has been produced; nothing else can be done.
    Finalized,
}

/// The sponge construction of FIPS 202 over the permutation `P`.
///
/// Input is XORed into the first `rate` bytes of the state, and output is read from them.
/// The state is permuted every time `rate` bytes have been absorbed or squeezed.
/// The remaining `P::N - rate` bytes (the capacity) are never exposed.
///
/// Methods suffixed with `_unchecked` do not check the [`Phase`] of the sponge,
/// and are meant for callers that enforce it through the type system.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sponge<P: Permutation = KeccakState> {
    permutation: P,
    position: usize,
    rate: usize,
    output_len: usize,
    #[zeroize(skip)]
    phase: Phase,
}

impl<P: Permutation> Sponge<P> {
    /// Initializes a sponge for an output (or security parameter) of `output_len` bytes.
    ///
    /// The rate is `P::N - 2 * output_len` bytes.
    /// Lengths for which the rate is empty, or smaller than the digest itself, are rejected.
    pub fn new(output_len: usize) -> HashResult<Self> {
        let rate = output_len
            .checked_mul(2)
            .and_then(|capacity| P::N.checked_sub(capacity))
            .filter(|&rate| rate > 0 && output_len <= rate)
            .ok_or(HashError::InvalidOutputLength(output_len))?;
        Ok(Self::with_rate(rate, output_len))
    }

    fn with_rate(rate: usize, output_len: usize) -> Self {
        debug_assert!(0 < rate && rate <= P::N);
        Self {
            permutation: P::default(),
            position: 0,
            rate,
            output_len,
            phase: Phase::Absorbing,
        }
    }

    /// The number of bytes absorbed or squeezed between two permutations.
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// The digest length (or security parameter) in bytes this sponge was initialized with.
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// The offset of the next byte to be absorbed or squeezed within the rate.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The current [`Phase`].
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The underlying permutation state.
    pub fn state(&self) -> &P {
        &self.permutation
    }

    fn expect_phase(&self, expected: Phase, operation: &str) -> Result<(), InvalidState> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(format!(
                "cannot {operation} while {:?}, expected {:?}",
                self.phase, expected
            )
            .into())
        }
    }

    /// Absorbs `input`, which can be of any length (including zero).
    pub fn absorb(&mut self, input: &[u8]) -> Result<(), InvalidState> {
        self.expect_phase(Phase::Absorbing, "absorb")?;
        self.absorb_unchecked(input);
        Ok(())
    }

    /// Pads the input absorbed so far with the domain separation `suffix` and permutes,
    /// moving to `phase`.
    fn pad(&mut self, suffix: u8, phase: Phase) -> Result<(), InvalidState> {
        self.expect_phase(Phase::Absorbing, "finalize")?;
        self.pad_unchecked(suffix);
        self.phase = phase;
        debug!(
            "sponge finalized with suffix {suffix:#04x} (rate = {})",
            self.rate
        );
        Ok(())
    }

    /// Finalizes the sponge as a SHA-3 hash, writing the digest into `output`.
    ///
    /// `output` must be exactly [`Sponge::output_len`] bytes long.
    pub fn finalize_digest(&mut self, output: &mut [u8]) -> HashResult<()> {
        self.expect_phase(Phase::Absorbing, "finalize")?;
        if output.len() != self.output_len {
            return Err(HashError::InvalidOutputLength(output.len()));
        }
        self.pad(SHA3_SUFFIX, Phase::Finalized)?;
        output.copy_from_slice(&self.permutation.as_ref()[..self.output_len]);
        Ok(())
    }

    /// Finalizes the sponge as a SHAKE extensible output function.
    ///
    /// Output can then be read, in any number of calls, with [`Sponge::squeeze`].
    pub fn finalize_xof(&mut self) -> Result<(), InvalidState> {
        self.pad(SHAKE_SUFFIX, Phase::Squeezing)
    }

    /// Squeezes `output.len()` bytes, continuing from where the previous call stopped.
    pub fn squeeze(&mut self, output: &mut [u8]) -> Result<(), InvalidState> {
        self.expect_phase(Phase::Squeezing, "squeeze")?;
        self.squeeze_unchecked(output);
        Ok(())
    }

    /// Absorbs `input` regardless of the current phase.
    ///
    /// **HAZARD**: absorbing after squeezing or after padding is not part of FIPS 202,
    /// and the output is then no longer a SHA-3 or SHAKE output.
    /// Prefer [`Sponge::absorb`] unless the phase is enforced by the caller.
    pub fn absorb_unchecked(&mut self, mut input: &[u8]) -> &mut Self {
        while !input.is_empty() {
            // after a squeeze the cursor may sit at the end of the rate
            if self.position >= self.rate {
                self.permutation.permute();
                self.position = 0;
            }
            let chunk_len = usize::min(input.len(), self.rate - self.position);
            let (chunk, rest) = input.split_at(chunk_len);

            self.permutation.as_mut()[self.position..self.position + chunk_len]
                .iter_mut()
                .zip(chunk)
                .for_each(|(s, b)| *s ^= b);
            self.position += chunk_len;
            if self.position == self.rate {
                self.permutation.permute();
                self.position = 0;
            }
            input = rest;
        }
        self
    }

    /// Injects the domain separation `suffix` at the current position,
    /// the final padding bit at the end of the rate, and permutes.
    /// The sponge is left ready to squeeze from the beginning of the rate.
    ///
    /// **HAZARD**: padding twice, or outside of the absorbing phase, is not part of FIPS 202.
    pub fn pad_unchecked(&mut self, suffix: u8) -> &mut Self {
        if self.position >= self.rate {
            self.permutation.permute();
            self.position = 0;
        }
        let state = self.permutation.as_mut();
        state[self.position] ^= suffix;
        state[self.rate - 1] ^= PAD_END;
        self.permutation.permute();
        self.position = 0;
        self
    }

    /// Squeezes `output.len()` bytes regardless of the current phase.
    ///
    /// **HAZARD**: squeezing before padding exposes the absorbed input XORed into the state.
    pub fn squeeze_unchecked(&mut self, output: &mut [u8]) -> &mut Self {
        let mut offset = 0;
        while offset < output.len() {
            if self.position >= self.rate {
                self.permutation.permute();
                self.position = 0;
            }
            let chunk_len = usize::min(output.len() - offset, self.rate - self.position);
            output[offset..offset + chunk_len].copy_from_slice(
                &self.permutation.as_ref()[self.position..self.position + chunk_len],
            );
            self.position += chunk_len;
            offset += chunk_len;
        }
        self
    }
}

impl Sponge<KeccakState> {
    /// A sponge computing the SHA-3 `variant`.
    pub fn sha3(variant: Sha3Variant) -> Self {
        Self::with_rate(variant.rate(), variant.output_len())
    }

    /// A sponge computing SHAKE at the security `level`.
    pub fn shake(level: SecurityLevel) -> Self {
        Self::with_rate(level.rate(), level.param_len())
    }
}

impl<P: Permutation> core::fmt::Debug for Sponge<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Ensure that the state isn't accidentally logged
        f.debug_struct("Sponge")
            .field("rate", &self.rate)
            .field("position", &self.position)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
