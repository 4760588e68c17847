use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::bitstream::BitSequence;
use crate::container::serialize_container;
use crate::error::Result;
use crate::huffman_coding::{encode, generate_codes, CodeTable, HuffTree};
use crate::tools::cli::{HufOpts, Source, DEMO_TEXT, DEMO_TRIGGER};
use crate::tools::freq_count::{count_frequencies, FrequencyTable};
use crate::tools::report::Stats;
use crate::tools::storage::{check_overwrite, read_source, write_artifact};

/// Suffix appended to the input name to form the artifact name.
pub const SUFFIX: &str = ".huf";

/// Everything one compression session produces.
#[derive(Debug, Clone)]
pub struct Compressed {
    pub freqs: FrequencyTable,
    pub codes: CodeTable,
    pub bits: BitSequence,
}

impl Compressed {
    /// Serialize into container bytes.
    pub fn to_container(&self) -> Vec<u8> {
        serialize_container(&self.bits, &self.freqs)
    }
}

/// Count, build the tree, derive the codes and encode. Empty input fails with EmptyAlphabet;
/// callers that want a no-op for empty input check first.
pub fn compress(data: &[u8]) -> Result<Compressed> {
    let freqs = count_frequencies(data)?;
    let tree = HuffTree::build(&freqs)?;
    let codes = generate_codes(&tree);
    let bits = encode(data, &codes)?;
    Ok(Compressed { freqs, codes, bits })
}

/// Result of writing one artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressReport {
    pub artifact: PathBuf,
    pub stats: Stats,
}

/// Artifact name for a source: the sample text goes to `demo.huf`, a file gets `.huf` appended.
pub fn artifact_path(source: &Source) -> PathBuf {
    let mut name = match source {
        Source::Demo => OsString::from(DEMO_TRIGGER),
        Source::File(path) => path.clone().into_os_string(),
    };
    name.push(SUFFIX);
    PathBuf::from(name)
}

/// The bytes behind a source.
pub fn load_source(source: &Source) -> Result<Vec<u8>> {
    match source {
        Source::Demo => Ok(DEMO_TEXT.as_bytes().to_vec()),
        Source::File(path) => read_source(path),
    }
}

/// Compress `data` and write the container to `artifact`.
pub fn compress_to_artifact(data: &[u8], artifact: &Path, show_codes: bool) -> Result<Stats> {
    let compressed = compress(data)?;
    if show_codes {
        info!("Code table ({} symbols):", compressed.codes.len());
        for (symbol, code) in compressed.codes.sorted() {
            info!("  {:>3} {:?} -> {}", symbol, symbol as char, code);
        }
    }
    let container = compressed.to_container();
    write_artifact(artifact, &container)?;
    Ok(Stats {
        original_bytes: data.len(),
        compressed_bits: compressed.bits.len(),
        container_bytes: container.len(),
    })
}

/// Compress the source named in opts to its artifact. Returns None (and writes nothing) when the
/// input is empty.
pub fn compress_file(opts: &HufOpts) -> Result<Option<CompressReport>> {
    let data = load_source(&opts.source)?;
    compress_loaded(opts, &data)
}

/// compress_file for data that has already been loaded.
pub(crate) fn compress_loaded(opts: &HufOpts, data: &[u8]) -> Result<Option<CompressReport>> {
    if data.is_empty() {
        warn!("Input {} is empty. Nothing to compress.", opts.source);
        return Ok(None);
    }
    info!("Compressing {} ({} bytes)", opts.source, data.len());

    let artifact = artifact_path(&opts.source);
    check_overwrite(&artifact, opts.force_overwrite)?;
    let stats = compress_to_artifact(data, &artifact, opts.show_codes)?;
    info!(
        "Wrote {}: {} bits of code, {} bytes in all",
        artifact.display(),
        stats.compressed_bits,
        stats.container_bytes
    );
    Ok(Some(CompressReport { artifact, stats }))
}
