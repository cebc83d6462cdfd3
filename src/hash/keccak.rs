//! The Keccak-f\[1600\] permutation.
//!
//! Each of the 24 rounds applies, in order, the steps θ (theta), ρ and π (rho, pi, merged into a single pass),
//! χ (chi) and ι (iota) to the 25 lanes of the state.
//! The arithmetic is performed on host-order lanes;
//! [`KeccakState`] takes care of converting from/to the canonical little-endian layout around the rounds.
use super::state::{KeccakState, LANES, WIDTH};
use super::Permutation;

/// Number of rounds of Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// Round constants, XORed into lane 0 by the iota step.
const RC: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rotation offsets, in the order lanes are visited by [`PI`].
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Destination lanes of the pi step, starting from lane 1.
/// Lane 0 is a fixed point and never moves.
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

#[inline(always)]
fn theta(a: &mut [u64; LANES]) {
    let mut c = [0u64; 5];
    for (x, parity) in c.iter_mut().enumerate() {
        *parity = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in (0..LANES).step_by(5) {
            a[y + x] ^= d;
        }
    }
}

#[inline(always)]
fn rho_pi(a: &mut [u64; LANES]) {
    let mut carry = a[1];
    for (&dst, &rot) in PI.iter().zip(RHO.iter()) {
        let next = a[dst];
        a[dst] = carry.rotate_left(rot);
        carry = next;
    }
}

#[inline(always)]
fn chi(a: &mut [u64; LANES]) {
    for y in (0..LANES).step_by(5) {
        let row = [a[y], a[y + 1], a[y + 2], a[y + 3], a[y + 4]];
        for x in 0..5 {
            a[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

#[inline(always)]
fn iota(a: &mut [u64; LANES], round: usize) {
    a[0] ^= RC[round];
}

/// Applies the 24 rounds of Keccak-f\[1600\] to host-order lanes.
pub fn keccak_f1600(a: &mut [u64; LANES]) {
    for round in 0..ROUNDS {
        theta(a);
        rho_pi(a);
        chi(a);
        iota(a, round);
    }
}

impl Permutation for KeccakState {
    const N: usize = WIDTH;

    fn permute(&mut self) {
        self.normalize();
        keccak_f1600(self.raw_lanes_mut());
        self.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, RngCore};

    #[test]
    fn test_zero_state() {
        let mut state = KeccakState::new();
        state.permute();
        assert_eq!(state.lane(0), 0xf125_8f79_40e1_dde7);
        assert_eq!(state.lane(1), 0x84d5_ccf9_33c0_478a);
        assert_eq!(state.lane(2), 0xd598_261e_a65a_a9ee);
        assert_eq!(state.lane(24), 0xeaf1_ff7b_5cec_a249);
    }

    /// The permutation must agree with the reference implementation of the `keccak` crate.
    #[test]
    fn test_against_reference() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let lanes: [u64; LANES] = core::array::from_fn(|_| rng.next_u64());
            let mut ours = lanes;
            let mut reference = lanes;
            keccak_f1600(&mut ours);
            keccak::f1600(&mut reference);
            assert_eq!(ours, reference);
        }
    }

    /// Permuting through the byte view must agree with permuting the lanes directly.
    #[test]
    fn test_state_permutation_uses_little_endian_bytes() {
        let mut rng = rand::thread_rng();
        let mut bytes = [0u8; WIDTH];
        rng.fill(&mut bytes[..]);

        let mut state = KeccakState::new();
        state.as_bytes_mut().copy_from_slice(&bytes);
        state.permute();

        let mut lanes: [u64; LANES] = core::array::from_fn(|i| {
            u64::from_le_bytes(bytes[8 * i..8 * i + 8].try_into().unwrap())
        });
        keccak_f1600(&mut lanes);
        assert_eq!(state.to_lanes(), lanes);
        for (i, lane) in lanes.iter().enumerate() {
            assert_eq!(&state.as_bytes()[8 * i..8 * i + 8], &lane.to_le_bytes());
        }
    }

    /// The round constants are the output of the degree-8 LFSR `x^8 + x^6 + x^5 + x^4 + 1`,
    /// seven bits per round, placed at bit positions `2^j - 1`.
    #[test]
    fn test_round_constants_from_lfsr() {
        let mut lfsr = 1u8;
        for (round, &expected) in RC.iter().enumerate() {
            let mut rc = 0u64;
            for j in 0..7 {
                if lfsr & 1 == 1 {
                    rc |= 1 << ((1 << j) - 1);
                }
                lfsr = (lfsr << 1) ^ if lfsr & 0x80 != 0 { 0x71 } else { 0 };
            }
            assert_eq!(rc, expected, "round {round}");
        }
    }
}
