//! The Keccak state is 1600 bits, arranged as a 5×5 grid of 64-bit lanes.
//! Lane `(x, y)` lives at index `x + 5 * y`.
//!
//! The state is stored once, as lanes, and the byte view is a zero-copy cast of the same memory.
//! Bytes always hold lanes in little-endian order: on big-endian hosts, lanes are swapped
//! to native order only for the duration of a permutation call (see [`KeccakState::normalize`]).
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;
/// Width of the state, in bytes.
pub const WIDTH: usize = LANES * 8;

/// The 1600-bit state of Keccak-f\[1600\].
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeccakState([u64; LANES]);

impl KeccakState {
    /// A zero-initialized state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from lanes given as (host-order) integers.
    pub fn from_lanes(lanes: [u64; LANES]) -> Self {
        let mut state = Self::default();
        for (i, lane) in lanes.into_iter().enumerate() {
            state.set_lane(i, lane);
        }
        state
    }

    /// Reads lane `index` as an integer.
    #[inline]
    pub fn lane(&self, index: usize) -> u64 {
        u64::from_le(self.0[index])
    }

    /// Overwrites lane `index`.
    #[inline]
    pub fn set_lane(&mut self, index: usize, value: u64) {
        self.0[index] = value.to_le();
    }

    /// Returns all lanes as integers.
    pub fn to_lanes(&self) -> [u64; LANES] {
        core::array::from_fn(|i| self.lane(i))
    }

    /// The state as 200 bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.0[..])
    }

    /// The state as 200 mutable bytes.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.0[..])
    }

    /// The raw lane storage, as laid out in memory.
    pub(crate) fn raw_lanes_mut(&mut self) -> &mut [u64; LANES] {
        &mut self.0
    }

    /// Converts every lane between its little-endian memory representation and host order.
    ///
    /// The conversion is an involution, hence the same call is used before and after a permutation.
    /// On little-endian hosts, this is a no-op.
    #[inline(always)]
    pub fn normalize(&mut self) {
        if cfg!(target_endian = "big") {
            for lane in self.0.iter_mut() {
                *lane = lane.swap_bytes();
            }
        }
    }
}

impl AsRef<[u8]> for KeccakState {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMut<[u8]> for KeccakState {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl core::fmt::Debug for KeccakState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Ensure that the state isn't accidentally logged
        write!(f, "KeccakState(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_alias() {
        let mut state = KeccakState::new();
        state.as_bytes_mut()[8] = 0x01;
        state.as_bytes_mut()[15] = 0x80;
        assert_eq!(state.lane(1), 0x8000_0000_0000_0001);

        state.set_lane(24, 0x0102_0304_0506_0708);
        assert_eq!(
            &state.as_bytes()[192..],
            &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(state.as_bytes().len(), WIDTH);
    }

    #[test]
    fn test_normalize_roundtrip() {
        let lanes: [u64; LANES] = core::array::from_fn(|i| (i as u64) << 56 | i as u64);
        let mut state = KeccakState::from_lanes(lanes);
        state.normalize();
        state.normalize();
        assert_eq!(state.to_lanes(), lanes);
    }

    #[test]
    fn test_zeroize() {
        let mut state = KeccakState::from_lanes([u64::MAX; LANES]);
        state.zeroize();
        assert_eq!(state, KeccakState::new());
    }
}
