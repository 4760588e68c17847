use std::fmt::{self, Display, Formatter};

/// Size figures for one compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Input length in bytes.
    pub original_bytes: usize,
    /// Encoded message length in bits, before padding.
    pub compressed_bits: usize,
    /// Size of the whole container (header + payload).
    pub container_bytes: usize,
}

impl Stats {
    pub fn original_bits(&self) -> usize {
        self.original_bytes * 8
    }

    /// Percentage of bits saved by the encoding alone (header excluded).
    pub fn saving(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        let original = self.original_bits() as f64;
        (original - self.compressed_bits as f64) / original * 100.0
    }

    /// Container size as a fraction of the original size.
    pub fn ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        self.container_bytes as f64 / self.original_bytes as f64
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== COMPRESSION STATISTICS ===")?;
        writeln!(
            f,
            "Original size:   {} bits ({} bytes)",
            self.original_bits(),
            self.original_bytes
        )?;
        writeln!(f, "Compressed size: {} bits", self.compressed_bits)?;
        writeln!(
            f,
            "Container size:  {} bytes ({:.3} of original)",
            self.container_bytes,
            self.ratio()
        )?;
        write!(f, "Saving:          {:.2}%", self.saving())
    }
}

#[cfg(test)]
mod test {
    use super::Stats;

    #[test]
    fn saving_and_ratio() {
        let stats = Stats {
            original_bytes: 10,
            compressed_bits: 20,
            container_bytes: 15,
        };
        assert_eq!(stats.original_bits(), 80);
        assert!((stats.saving() - 75.0).abs() < 1e-9);
        assert!((stats.ratio() - 1.5).abs() < 1e-9);
        assert!(stats.to_string().contains("Saving:          75.00%"));
    }

    #[test]
    fn empty_input_reports_zero() {
        let stats = Stats {
            original_bytes: 0,
            compressed_bits: 0,
            container_bytes: 0,
        };
        assert_eq!(stats.saving(), 0.0);
        assert_eq!(stats.ratio(), 0.0);
    }
}
