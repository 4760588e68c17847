//! BitReader: reads a packed bitstream back one bit (or one byte) at a time.
//!
//! The reader works over an in-memory slice and can be limited to fewer bits than the slice
//! holds, which is how trailing pad bits are kept out of decoding.
//!

const BIT_MASK: u8 = 0x80;

/// Reads bits MSB first from a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    /// Total number of readable bits.
    limit: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader over every bit of `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_limit(buffer, buffer.len() * 8)
    }

    /// Creates a new BitReader that stops after `limit` bits (or the end of `buffer`).
    pub fn with_limit(buffer: &'a [u8], limit: usize) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            limit: limit.min(buffer.len() * 8),
        }
    }

    /// Bits consumed so far.
    pub fn position(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Bits left to read.
    pub fn remaining(&self) -> usize {
        self.limit - self.position()
    }

    /// Return the next bit (*true* for 1), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<bool> {
        if self.remaining() == 0 {
            return None;
        }
        let bit = self.buffer[self.cursor] & (BIT_MASK >> self.bit_index) != 0;
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        Some(bit)
    }

    /// Returns the next 8 bits as a byte, or None if fewer than 8 remain.
    pub fn byte(&mut self) -> Option<u8> {
        if self.remaining() < 8 {
            return None;
        }
        // Aligned reads are the common case (container headers), so take the byte directly.
        if self.bit_index == 0 {
            let byte = self.buffer[self.cursor];
            self.cursor += 1;
            return Some(byte);
        }
        let mut byte = 0_u8;
        for _ in 0..8 {
            byte = byte << 1 | self.bit()? as u8;
        }
        Some(byte)
    }

    /// Returns the next n bytes, or None (consuming nothing) if there are not enough left.
    pub fn bytes(&mut self, n: usize) -> Option<Vec<u8>> {
        if self.remaining() < n * 8 {
            return None;
        }
        let mut result: Vec<u8> = Vec::with_capacity(n);
        for _ in 0..n {
            result.push(self.byte()?);
        }
        Some(result)
    }

    /// Reads a little endian u32 from the next four bytes.
    pub fn u32_le(&mut self) -> Option<u32> {
        let b = self.bytes(4)?;
        Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Takes every remaining whole byte. The reader must be byte aligned; otherwise None.
    pub fn rest(&mut self) -> Option<&'a [u8]> {
        if self.bit_index != 0 {
            return None;
        }
        let end = self.limit / 8;
        let rest = &self.buffer[self.cursor..end];
        self.cursor = end;
        Some(rest)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for BitReader<'_> {}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bit(), Some(true));
        for _ in 0..6 {
            assert_eq!(br.bit(), Some(false));
        }
        assert_eq!(br.bit(), Some(true));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn limit_hides_padding() {
        let x = [0b1110_0000_u8];
        let br = BitReader::with_limit(&x, 3);
        assert_eq!(br.len(), 3);
        assert_eq!(br.collect::<Vec<_>>(), vec![true, true, true]);
    }

    #[test]
    fn byte_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        assert_eq!(br.byte(), Some(b'H'));
        assert_eq!(br.byte(), Some(b'e'));
        assert_eq!(br.bytes(3), Some("llo".as_bytes().to_vec()));
        assert_eq!(br.loc(), "[5.0]");
    }

    #[test]
    fn unaligned_byte_test() {
        let x = [0b0101_0101, 0b1000_0000];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bit(), Some(false));
        assert_eq!(br.byte(), Some(0b1010_1011));
        assert_eq!(br.loc(), "[1.1]");
        assert_eq!(br.rest(), None);
    }

    #[test]
    fn u32_le_and_rest() {
        let x = [0x03, 0x00, 0x00, 0x00, 0xaa, 0xbb];
        let mut br = BitReader::new(&x);
        assert_eq!(br.u32_le(), Some(3));
        assert_eq!(br.rest(), Some(&[0xaa_u8, 0xbb][..]));
        assert_eq!(br.rest(), Some(&[][..]));
    }

    #[test]
    fn short_read_consumes_nothing() {
        let x = [1, 2, 3];
        let mut br = BitReader::new(&x);
        assert_eq!(br.u32_le(), None);
        assert_eq!(br.position(), 0);
        assert_eq!(br.bytes(3), Some(vec![1, 2, 3]));
    }
}
