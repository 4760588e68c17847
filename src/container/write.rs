use log::debug;

use super::{COUNT_BYTES, ENTRY_BYTES};
use crate::bitstream::BitSequence;
use crate::tools::freq_count::FrequencyTable;

/// Serialize the frequency table, padding count and packed bits into container bytes.
pub fn serialize_container(bits: &BitSequence, freqs: &FrequencyTable) -> Vec<u8> {
    let mut output =
        Vec::with_capacity(COUNT_BYTES + freqs.len() * ENTRY_BYTES + 1 + bits.as_bytes().len());

    // A FrequencyTable is keyed by u8, so the count always fits.
    output.extend_from_slice(&(freqs.len() as u32).to_le_bytes());

    let mut entries = freqs.iter().map(|(&s, &f)| (s, f)).collect::<Vec<_>>();
    entries.sort_unstable();
    for (symbol, freq) in entries {
        output.push(symbol);
        output.extend_from_slice(&freq.to_le_bytes());
    }

    output.push(bits.padding());
    // BitSequence keeps its pad bits zeroed, so the packed bytes go out unchanged.
    output.extend_from_slice(bits.as_bytes());

    debug!(
        "Container: {} symbols, {} bits, {} padding, {} bytes",
        freqs.len(),
        bits.len(),
        bits.padding(),
        output.len()
    );
    output
}
