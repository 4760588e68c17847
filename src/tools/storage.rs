//! The storage collaborators: whole-file reads and writes, with failures mapped to HuffError::Io.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use log::debug;

use crate::error::{HuffError, Result};

/// Read the full contents of `path`.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path).map_err(|e| HuffError::io(path.display().to_string(), e))?;
    debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Fail with AlreadyExists if `path` is taken and `force` is not set.
pub fn check_overwrite(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(HuffError::io(
            path.display().to_string(),
            io::Error::new(
                io::ErrorKind::AlreadyExists,
                "output file exists (use -f to overwrite)",
            ),
        ));
    }
    Ok(())
}

/// Write `data` to `path`, replacing any existing file. The data is flushed and synced
/// before returning so it can be read straight back.
pub fn write_artifact(path: &Path, data: &[u8]) -> Result<()> {
    let name = || path.display().to_string();
    let mut f_out = File::create(path).map_err(|e| HuffError::io(name(), e))?;
    f_out.write_all(data).map_err(|e| HuffError::io(name(), e))?;
    f_out.sync_all().map_err(|e| HuffError::io(name(), e))?;
    debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{check_overwrite, read_source, write_artifact};
    use crate::error::HuffError;

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.huf");
        write_artifact(&path, b"\x01\x02\x03").unwrap();
        assert_eq!(read_source(&path).unwrap(), vec![1, 2, 3]);
        // Overwrites
        write_artifact(&path, b"x").unwrap();
        assert_eq!(read_source(&path).unwrap(), b"x".to_vec());
    }

    #[test]
    fn existing_file_needs_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taken.huf");
        check_overwrite(&path, false).unwrap();
        write_artifact(&path, b"x").unwrap();
        match check_overwrite(&path, false) {
            Err(HuffError::Io { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
        check_overwrite(&path, true).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        match read_source(&path) {
            Err(HuffError::Io { path: p, source }) => {
                assert!(p.ends_with("nope.txt"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn unwritable_target_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.huf");
        assert!(matches!(
            write_artifact(&path, b"data"),
            Err(HuffError::Io { .. })
        ));
    }
}
