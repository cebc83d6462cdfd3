use crate::errors::InvalidState;
use crate::hash::{Permutation, Sponge};

/// Objects bytes can be written (absorbed) into.
pub trait ByteWriter {
    fn write_bytes(&mut self, input: &[u8]) -> Result<(), InvalidState>;
}

/// Objects bytes can be read (squeezed) from.
pub trait ByteReader {
    fn fill_next_bytes(&mut self, output: &mut [u8]) -> Result<(), InvalidState>;

    #[inline(always)]
    fn next_bytes<const N: usize>(&mut self) -> Result<[u8; N], InvalidState> {
        let mut output = [0u8; N];
        self.fill_next_bytes(&mut output).map(|()| output)
    }
}

impl<P: Permutation> ByteWriter for Sponge<P> {
    #[inline]
    fn write_bytes(&mut self, input: &[u8]) -> Result<(), InvalidState> {
        self.absorb(input)
    }
}

impl<P: Permutation> ByteReader for Sponge<P> {
    #[inline]
    fn fill_next_bytes(&mut self, output: &mut [u8]) -> Result<(), InvalidState> {
        self.squeeze(output)
    }
}
