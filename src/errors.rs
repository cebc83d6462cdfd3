/// The [`fips202`](crate) package has two types of errors:
/// [`InvalidState`], which is raised whenever the absorb/squeeze protocol of a sponge is violated
/// (absorbing after finalization, squeezing before it, or finalizing twice),
/// and [`HashError`], the error returned by every fallible entry point of the crate.
/// Three types of errors can happen when dealing with [`HashError`]:
///
/// - Protocol violations ([`HashError::InvalidState`]):
///   a wrapper around [`InvalidState`], providing convenient conversions from/to it.
///   The offending call is always rejected before touching the sponge state.
///
/// - Invalid output length ([`HashError::InvalidOutputLength`]):
///   the requested digest length does not identify a SHA-3 variant,
///   or yields a rate outside of the Keccak state.
///
/// - Invalid security level ([`HashError::InvalidSecurityLevel`]):
///   the requested SHAKE security level is neither 128 nor 256 bits.
///
/// A [`core::result::Result`] wrapper called [`HashResult`] (having error fixed to [`HashError`]) is also provided.
use std::{borrow::Borrow, error::Error, fmt::Display};

/// Signals a call that is not allowed in the current phase of the sponge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidState(String);

/// An error happened while hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The sponge was used out of order.
    InvalidState(InvalidState),
    /// The output length (in bytes) is not supported.
    InvalidOutputLength(usize),
    /// The security level (in bits) is not supported.
    InvalidSecurityLevel(usize),
}

/// The result type of hashing operations.
pub type HashResult<T> = Result<T, HashError>;

impl Display for InvalidState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid state: {}", self.0)
    }
}

impl Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidState(e) => e.fmt(f),
            Self::InvalidOutputLength(len) => write!(f, "Invalid output length: {len} bytes"),
            Self::InvalidSecurityLevel(bits) => write!(f, "Invalid security level: {bits} bits"),
        }
    }
}

impl Error for InvalidState {}
impl Error for HashError {}

impl From<&str> for InvalidState {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl From<String> for InvalidState {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl<B: Borrow<InvalidState>> From<B> for HashError {
    fn from(value: B) -> Self {
        HashError::InvalidState(value.borrow().clone())
    }
}

impl From<HashError> for std::io::Error {
    fn from(value: HashError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, value)
    }
}
