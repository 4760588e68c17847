use log::debug;
use rustc_hash::FxHashMap;

use crate::error::{HuffError, Result};

/// Symbol -> occurrence count. Every key present has a count of at least 1.
pub type FrequencyTable = FxHashMap<u8, u32>;

/// Returns a frequency count of the input data. Symbols that never occur are left out.
pub fn count_frequencies(data: &[u8]) -> Result<FrequencyTable> {
    // Count wide, then narrow: the container stores each count in 4 bytes.
    let mut counts = vec![0_u64; 256];
    data.iter().for_each(|&el| counts[el as usize] += 1);

    let mut freqs = FrequencyTable::default();
    for (symbol, &count) in counts.iter().enumerate().filter(|(_, c)| **c > 0) {
        let symbol = symbol as u8;
        let count = u32::try_from(count).map_err(|_| HuffError::FrequencyOverflow { symbol })?;
        freqs.insert(symbol, count);
    }
    debug!(
        "Counted {} bytes, {} distinct symbols",
        data.len(),
        freqs.len()
    );
    Ok(freqs)
}
