use log::{debug, trace};

use super::{COUNT_BYTES, ENTRY_BYTES, MAX_SYMBOLS};
use crate::bitstream::{BitReader, BitSequence};
use crate::error::{HuffError, Result};
use crate::huffman_coding::tree::HuffTree;
use crate::tools::freq_count::FrequencyTable;

/// Parse container bytes back into the code bits and the frequency table.
pub fn deserialize_container(data: &[u8]) -> Result<(BitSequence, FrequencyTable)> {
    let mut br = BitReader::new(data);

    let count = br
        .u32_le()
        .ok_or_else(|| truncated_header(&br, COUNT_BYTES))? as usize;
    if count > MAX_SYMBOLS {
        return Err(HuffError::InvalidHeader(format!(
            "symbol count {} exceeds {}",
            count, MAX_SYMBOLS
        )));
    }
    trace!("Symbol count {} read at {}", count, br.loc());

    let mut freqs = FrequencyTable::default();
    for _ in 0..count {
        let entry = br
            .bytes(ENTRY_BYTES)
            .ok_or_else(|| truncated_header(&br, ENTRY_BYTES))?;
        let symbol = entry[0];
        let freq = u32::from_le_bytes([entry[1], entry[2], entry[3], entry[4]]);
        if freq == 0 {
            return Err(HuffError::InvalidHeader(format!(
                "symbol 0x{:02x} has a zero frequency",
                symbol
            )));
        }
        if freqs.insert(symbol, freq).is_some() {
            return Err(HuffError::InvalidHeader(format!(
                "symbol 0x{:02x} appears twice",
                symbol
            )));
        }
    }

    let padding = br.byte().ok_or_else(|| truncated_header(&br, 1))?;
    if padding > 7 {
        return Err(HuffError::InvalidHeader(format!(
            "padding {} is not in 0-7",
            padding
        )));
    }
    let payload = br.rest().unwrap_or(&[]);
    trace!("Payload of {} bytes starts at {}", payload.len(), br.loc());

    // The table decides the tree, and the tree decides exactly how many bits follow.
    let expected_bits = if freqs.is_empty() {
        0
    } else {
        HuffTree::build(&freqs)?.weighted_path_length()
    };
    let expected_bytes = usize::try_from((expected_bits + 7) / 8).unwrap_or(usize::MAX);
    if payload.len() < expected_bytes {
        return Err(HuffError::TruncatedPayload {
            expected: expected_bytes,
            actual: payload.len(),
        });
    }
    if payload.len() > expected_bytes {
        return Err(HuffError::InvalidHeader(format!(
            "{} bytes follow a {} byte payload",
            payload.len() - expected_bytes,
            expected_bytes
        )));
    }
    // Only an empty table gets here with no payload, and it has no bits to pad.
    if padding > 0 && payload.is_empty() {
        return Err(HuffError::InvalidHeader(format!(
            "padding {} with an empty payload",
            padding
        )));
    }

    let len = payload.len() * 8 - padding as usize;
    if len as u64 != expected_bits {
        return Err(HuffError::InvalidHeader(format!(
            "padding {} leaves {} bits, frequency table needs {}",
            padding, len, expected_bits
        )));
    }
    let bits = BitSequence::from_packed(payload.to_vec(), len).ok_or(
        HuffError::TruncatedPayload {
            expected: expected_bytes,
            actual: payload.len(),
        },
    )?;

    debug!(
        "Read container: {} symbols, {} bits, {} padding",
        freqs.len(),
        bits.len(),
        padding
    );
    Ok((bits, freqs))
}

fn truncated_header(br: &BitReader<'_>, needed: usize) -> HuffError {
    HuffError::TruncatedHeader {
        needed,
        offset: br.position() / 8,
    }
}

#[cfg(test)]
mod test {
    use super::deserialize_container;
    use crate::bitstream::BitSequence;
    use crate::container::serialize_container;
    use crate::error::HuffError;
    use crate::huffman_coding::{encode, generate_codes, HuffTree};
    use crate::tools::freq_count::{count_frequencies, FrequencyTable};

    fn container_for(text: &[u8]) -> (Vec<u8>, BitSequence, FrequencyTable) {
        let freqs = count_frequencies(text).unwrap();
        let tree = HuffTree::build(&freqs).unwrap();
        let bits = encode(text, &generate_codes(&tree)).unwrap();
        (serialize_container(&bits, &freqs), bits, freqs)
    }

    #[test]
    fn container_round_trip() {
        let (bytes, bits, freqs) = container_for(b"this is an example of a huffman tree");
        let (read_bits, read_freqs) = deserialize_container(&bytes).unwrap();
        assert_eq!(read_bits, bits);
        assert_eq!(read_freqs, freqs);
    }

    #[test]
    fn thirteen_bits_survive_padding() {
        let freqs: FrequencyTable = [(b'x', 13)].into_iter().collect();
        let bits: BitSequence = "0000000000000".parse().unwrap();
        let bytes = serialize_container(&bits, &freqs);
        assert_eq!(bytes[9], 3);
        let (read_bits, _) = deserialize_container(&bytes).unwrap();
        assert_eq!(read_bits.len(), 13);
        assert_eq!(read_bits, bits);
    }

    #[test]
    fn empty_container() {
        let bytes = serialize_container(&BitSequence::new(), &FrequencyTable::default());
        assert_eq!(bytes, vec![0, 0, 0, 0, 0]);
        let (bits, freqs) = deserialize_container(&bytes).unwrap();
        assert!(bits.is_empty());
        assert!(freqs.is_empty());
    }

    #[test]
    fn truncated_in_header() {
        let (bytes, _, _) = container_for(b"abracadabra");
        assert!(matches!(
            deserialize_container(&bytes[..2]),
            Err(HuffError::TruncatedHeader { needed: 4, offset: 0 })
        ));
        // Part way through the second entry
        assert!(matches!(
            deserialize_container(&bytes[..11]),
            Err(HuffError::TruncatedHeader { needed: 5, offset: 9 })
        ));
        // Entries complete, padding byte missing: 5 symbols
        let header = 4 + 5 * 5;
        assert!(matches!(
            deserialize_container(&bytes[..header]),
            Err(HuffError::TruncatedHeader { needed: 1, .. })
        ));
    }

    #[test]
    fn truncated_in_payload() {
        let (bytes, bits, _) = container_for(b"abracadabra! huffman coding is a lossless data compression algorithm.");
        assert!(bits.as_bytes().len() > 2);
        let cut = bytes.len() - 2;
        match deserialize_container(&bytes[..cut]) {
            Err(HuffError::TruncatedPayload { expected, actual }) => {
                assert_eq!(expected, bits.as_bytes().len());
                assert_eq!(actual, expected - 2);
            }
            other => panic!("expected TruncatedPayload, got {:?}", other),
        }
    }

    #[test]
    fn payload_cut_off_entirely() {
        // "aaaa" has padding 4; drop its only payload byte.
        let (bytes, _, _) = container_for(b"aaaa");
        assert_eq!(bytes.len(), 11);
        assert!(matches!(
            deserialize_container(&bytes[..10]),
            Err(HuffError::TruncatedPayload {
                expected: 1,
                actual: 0
            })
        ));

        // Header only: 4 + 5 * 5 + 1 bytes, every payload byte gone.
        let (bytes, bits, _) = container_for(b"abracadabra");
        assert_ne!(bits.padding(), 0);
        match deserialize_container(&bytes[..30]) {
            Err(HuffError::TruncatedPayload { expected, actual }) => {
                assert_eq!(expected, bits.as_bytes().len());
                assert_eq!(actual, 0);
            }
            other => panic!("expected TruncatedPayload, got {:?}", other),
        }
    }

    #[test]
    fn empty_table_with_padding_is_invalid() {
        let bytes = vec![0, 0, 0, 0, 3];
        assert!(matches!(
            deserialize_container(&bytes),
            Err(HuffError::InvalidHeader(_))
        ));
    }

    #[test]
    fn rejects_bad_headers() {
        // Too many symbols
        let mut bytes = vec![0x01, 0x01, 0, 0];
        assert!(matches!(
            deserialize_container(&bytes),
            Err(HuffError::InvalidHeader(_))
        ));

        // Zero frequency
        bytes = vec![1, 0, 0, 0, b'a', 0, 0, 0, 0, 0];
        assert!(matches!(
            deserialize_container(&bytes),
            Err(HuffError::InvalidHeader(_))
        ));

        // Duplicate symbol
        bytes = vec![2, 0, 0, 0, b'a', 1, 0, 0, 0, b'a', 1, 0, 0, 0, 0, 0];
        assert!(matches!(
            deserialize_container(&bytes),
            Err(HuffError::InvalidHeader(_))
        ));

        // Padding out of range: one 'a', one bit "0", padding 8
        bytes = vec![1, 0, 0, 0, b'a', 1, 0, 0, 0, 8, 0];
        assert!(matches!(
            deserialize_container(&bytes),
            Err(HuffError::InvalidHeader(_))
        ));

        // Padding disagrees with the table: one bit needs padding 7
        bytes = vec![1, 0, 0, 0, b'a', 1, 0, 0, 0, 6, 0];
        assert!(matches!(
            deserialize_container(&bytes),
            Err(HuffError::InvalidHeader(_))
        ));

        // Trailing bytes
        bytes = vec![1, 0, 0, 0, b'a', 1, 0, 0, 0, 7, 0, 0];
        assert!(matches!(
            deserialize_container(&bytes),
            Err(HuffError::InvalidHeader(_))
        ));
    }

    #[test]
    fn stray_pad_bits_are_cleared() {
        // One 'a' -> one bit. The pad bits of the payload byte are set but must be ignored.
        let bytes = vec![1, 0, 0, 0, b'a', 1, 0, 0, 0, 7, 0b0111_1111];
        let (bits, _) = deserialize_container(&bytes).unwrap();
        assert_eq!(bits.to_string(), "0");
    }
}
