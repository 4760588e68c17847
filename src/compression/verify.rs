use log::info;

use super::compress::{compress_loaded, load_source, CompressReport};
use super::decompress::decompress;
use crate::error::{HuffError, Result};
use crate::tools::cli::HufOpts;
use crate::tools::storage::read_source;

/// Compress the source, read the artifact back from storage, decompress it and compare with the
/// original. Returns None when the input is empty.
pub fn test_file(opts: &HufOpts) -> Result<Option<CompressReport>> {
    let original = load_source(&opts.source)?;
    let report = match compress_loaded(opts, &original)? {
        Some(report) => report,
        None => return Ok(None),
    };

    let stored = read_source(&report.artifact)?;
    let restored = decompress(&stored)?;
    if restored != original {
        return Err(HuffError::VerifyFailed(report.artifact.display().to_string()));
    }
    info!("Decompressed data matches the original.");
    Ok(Some(report))
}

#[cfg(test)]
mod test {
    use super::test_file;
    use crate::error::HuffError;
    use crate::tools::cli::{HufOpts, Mode, Source};

    fn opts_for(source: Source) -> HufOpts {
        HufOpts {
            source,
            op_mode: Mode::Test,
            ..HufOpts::default()
        }
    }

    #[test]
    fn verifies_binary_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("blob.bin");
        let data = (0..2000_u32).map(|i| (i * i % 251) as u8).collect::<Vec<u8>>();
        std::fs::write(&input, &data).unwrap();
        let report = test_file(&opts_for(Source::File(input))).unwrap().unwrap();
        assert_eq!(report.stats.original_bytes, 2000);
        assert!(report.artifact.exists());
    }

    #[test]
    fn empty_file_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty");
        std::fs::write(&input, b"").unwrap();
        assert_eq!(test_file(&opts_for(Source::File(input))).unwrap(), None);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::File(dir.path().join("absent"));
        assert!(matches!(test_file(&opts_for(source)), Err(HuffError::Io { .. })));
    }
}
