//! This module defines the sponge construction of FIPS 202.
//!
//! It is layered as follows:
//! - [`state::KeccakState`] is the 1600-bit state, viewable both as 25 lanes and as 200 bytes;
//! - [`keccak`] implements the Keccak-f\[1600\] permutation over that state;
//! - [`sponge::Sponge`] absorbs arbitrary-length input into the state and squeezes output from it,
//! either as a fixed-length digest (SHA-3) or as an extensible output stream (SHAKE).
//! Cf. [Wikipedia](https://en.wikipedia.org/wiki/Sponge_function) for an overview of the construction.

/// The Keccak-f\[1600\] permutation.
pub mod keccak;
/// The absorb/squeeze sponge context.
pub mod sponge;
/// The 1600-bit Keccak state.
pub mod state;

pub use keccak::keccak_f1600;
pub use sponge::{Phase, Sponge};
pub use state::KeccakState;

use zeroize::Zeroize;

/// A permutation over a state of bytes.
///
/// For implementors:
///
/// - The [`std::default::Default`] implementation *MUST* initialize the state to zero.
/// - The byte view exposed through [`AsRef`] and [`AsMut`] must be [`Permutation::N`] bytes long,
/// and must alias the memory the permutation operates on.
pub trait Permutation: Zeroize + Default + Clone + AsRef<[u8]> + AsMut<[u8]> {
    /// The width of the state, in bytes.
    const N: usize;

    /// Permute the state in place.
    fn permute(&mut self);
}
