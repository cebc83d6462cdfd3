//! A two-phase byte stream over SHAKE.
//!
//! ```
//! use fips202::{SecurityLevel, ShakeStream};
//!
//! let mut stream = ShakeStream::new(SecurityLevel::Shake128);
//! stream.write(b"a").unwrap();
//! stream.write(b"bc").unwrap();
//! stream.finish().unwrap();
//!
//! let mut first = [0u8; 16];
//! let mut second = [0u8; 16];
//! stream.read(&mut first).unwrap();
//! stream.read(&mut second).unwrap();
//! assert_eq!(hex::encode(first), "5881092dd818bf5cf8a3ddb793fbcba7");
//! ```
use std::io;

use log::warn;

use crate::errors::{HashError, HashResult, InvalidState};
use crate::hash::{Phase, Sponge};
use crate::traits::{ByteReader, ByteWriter};
use crate::variant::SecurityLevel;

/// A SHAKE instance enforcing the write → finish → read protocol.
///
/// The stream is forward-only: there is no seeking, and neither the input nor the output has a length.
/// Calls made in the wrong phase are rejected with [`InvalidState`] and have no effect on the stream.
#[derive(Clone)]
pub struct ShakeStream {
    sponge: Sponge,
    level: SecurityLevel,
    written: bool,
}

impl ShakeStream {
    /// A fresh, writable stream at the security `level`.
    pub fn new(level: SecurityLevel) -> Self {
        Self {
            sponge: Sponge::shake(level),
            level,
            written: false,
        }
    }

    /// A stream at the security level of `bits` (128 or 256).
    pub fn from_bits(bits: usize) -> HashResult<Self> {
        SecurityLevel::from_bits(bits).map(Self::new)
    }

    /// The security level this stream was created with.
    pub fn security_level(&self) -> SecurityLevel {
        self.level
    }

    /// True until [`ShakeStream::finish`] is called.
    pub fn can_write(&self) -> bool {
        self.sponge.phase() == Phase::Absorbing
    }

    /// True once [`ShakeStream::finish`] has been called.
    pub fn can_read(&self) -> bool {
        self.sponge.phase() == Phase::Squeezing
    }

    /// Absorbs `input` into the stream.
    pub fn write(&mut self, input: &[u8]) -> Result<(), InvalidState> {
        self.sponge
            .absorb(input)
            .inspect_err(|_| warn!("rejected write on a finished stream"))?;
        self.written = true;
        Ok(())
    }

    /// Ends the input and makes the stream readable.
    pub fn finish(&mut self) -> Result<(), InvalidState> {
        self.sponge
            .finalize_xof()
            .inspect_err(|_| warn!("rejected a second call to finish"))
    }

    /// Fills `output` with the next bytes of the stream.
    pub fn read(&mut self, output: &mut [u8]) -> Result<(), InvalidState> {
        self.sponge
            .squeeze(output)
            .inspect_err(|_| warn!("rejected read on an unfinished stream"))
    }
}

impl ByteWriter for ShakeStream {
    #[inline]
    fn write_bytes(&mut self, input: &[u8]) -> Result<(), InvalidState> {
        self.write(input)
    }
}

impl ByteReader for ShakeStream {
    #[inline]
    fn fill_next_bytes(&mut self, output: &mut [u8]) -> Result<(), InvalidState> {
        self.read(output)
    }
}

impl io::Write for ShakeStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        ShakeStream::write(self, buf).map_err(HashError::from)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for ShakeStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        ShakeStream::read(self, buf).map_err(HashError::from)?;
        Ok(buf.len())
    }
}

impl Drop for ShakeStream {
    fn drop(&mut self) {
        if self.written && self.can_write() {
            warn!("{:?} dropped before being finished", self.level);
        }
    }
}

impl core::fmt::Debug for ShakeStream {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ShakeStream({:?}, {:?})", self.level, self.sponge.phase())
    }
}
