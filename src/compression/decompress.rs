use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{info, trace};

use super::compress::{artifact_path, SUFFIX};
use crate::container::deserialize_container;
use crate::error::{HuffError, Result};
use crate::huffman_coding::{decode, HuffTree};
use crate::tools::cli::{HufOpts, Output, Source};
use crate::tools::storage::{check_overwrite, read_source, write_artifact};

/// Suffix used for the restored file when the input name has no `.huf` suffix to strip.
pub const RESTORED_SUFFIX: &str = ".out";

/// Parse a container, rebuild the tree from its frequency table and decode the payload.
/// The decoded length must match the total of the stored frequencies.
pub fn decompress(container: &[u8]) -> Result<Vec<u8>> {
    let (bits, freqs) = deserialize_container(container)?;
    if freqs.is_empty() {
        return Ok(Vec::new());
    }
    let tree = HuffTree::build(&freqs)?;
    let data = decode(&bits, &tree)?;
    if data.len() as u64 != tree.symbol_count() {
        return Err(HuffError::LengthMismatch {
            expected: tree.symbol_count(),
            actual: data.len() as u64,
        });
    }
    trace!("Restored {} bytes from {} bits", data.len(), bits.len());
    Ok(data)
}

/// Name for the restored file: strip `.huf`, or append `.out` if there is nothing to strip.
/// Works on the raw file name, so names that are not valid UTF-8 survive unchanged.
pub fn restored_path(path: &Path) -> PathBuf {
    let huf = OsStr::new(SUFFIX.trim_start_matches('.'));
    match (path.extension(), path.file_stem()) {
        (Some(ext), Some(stem)) if ext == huf => path.with_file_name(stem),
        _ => {
            let mut name = path.as_os_str().to_os_string();
            name.push(RESTORED_SUFFIX);
            PathBuf::from(name)
        }
    }
}

/// Decompress the artifact named in opts. For the sample text trigger this is `demo.huf`.
/// Returns the restored file's path, or None when the output went to stdout.
pub fn decompress_file(opts: &HufOpts) -> Result<Option<PathBuf>> {
    let input = match &opts.source {
        Source::Demo => artifact_path(&Source::Demo),
        Source::File(path) => path.clone(),
    };
    info!("Decompressing {}", input.display());
    let data = decompress(&read_source(&input)?)?;

    match opts.output {
        Output::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&data)
                .and_then(|_| stdout.flush())
                .map_err(|e| HuffError::io("<stdout>", e))?;
            Ok(None)
        }
        Output::File => {
            let target = restored_path(&input);
            check_overwrite(&target, opts.force_overwrite)?;
            write_artifact(&target, &data)?;
            info!("Wrote {} bytes to {}", data.len(), target.display());
            Ok(Some(target))
        }
    }
}
