use log::error;

use super::bit_sequence::BitSequence;

/// Creates a bitstream for output. Bits collect in a 64 bit queue and are moved to the output
/// buffer a byte at a time. Call finish() to pad the last byte and take the result.
pub struct BitPacker {
    output: Vec<u8>,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of `size` bytes preallocated.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /*
    NOTE: out24 takes a u32. The 8 most significant bits of the word indicate how
    many of the least significant bits will be written. Those bits must be aligned to
    the least signficant bit. (The middle bits are masked out.)

    Eg 0000100_00000000_00000000_00000010 writes out 0010.
    */
    /// Writes 0-24 bits encoded with the number of bits to write in the most
    /// significant byte of a 32 bit word. A length above 24 is taken as 24.
    pub(crate) fn out24(&mut self, data: u32) {
        let depth = ((data >> 24) as u8).min(24); //get bit length by shifting out the 24 data bits
        if depth == 0 {
            return;
        }
        self.queue <<= depth; //shift queue by bit length
        self.queue |= (data & (0xffffffff >> (32 - depth))) as u64; //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.write_stream();
    }

    /// Puts one byte on the stream.
    pub fn out8(&mut self, data: u8) {
        self.queue <<= 8;
        self.queue |= data as u64;
        self.q_bits += 8;
        self.write_stream();
    }

    /// Puts a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.out24((1 << 24) | bit as u32);
    }

    /// Puts every bit of `bits` on the stream, a byte at a time where possible.
    pub fn out_seq(&mut self, bits: &BitSequence) {
        let full = bits.len() / 8;
        let bytes = bits.as_bytes();
        bytes[..full].iter().for_each(|&byte| self.out8(byte));
        let rest = (bits.len() % 8) as u32;
        if rest > 0 {
            // The tail sits in the high bits of the last byte; move it down to the low end.
            let tail = (bytes[full] >> (8 - rest)) as u32;
            self.out24((rest << 24) | tail);
        }
    }

    /// Number of bits written so far, including those still in the queue.
    pub fn bit_count(&self) -> usize {
        self.output.len() * 8 + self.q_bits as usize
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits, and returns everything written as a BitSequence.
    pub fn finish(mut self) -> BitSequence {
        let len = self.bit_count();
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
        BitSequence::from_parts(self.output, len)
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bit_count() / 8, self.bit_count() % 8)
    }
}
