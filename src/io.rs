//! Whole-file load and store of fixed-size records.

use crate::codec::{Record, decode, encode};
use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// Reads `path` whole and decodes one `R` from it.
///
/// A missing file, a read error or fewer than [`Record::SIZE`] bytes fail.
/// Extra trailing bytes are ignored with a warning.
pub fn load<R: Record>(path: &Path) -> Result<R> {
    let data = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if data.len() < R::SIZE {
        return Err(Error::ShortRead {
            path: path.to_path_buf(),
            expected: R::SIZE,
            actual: data.len(),
        });
    }
    if data.len() > R::SIZE {
        warn!(
            path = %path.display(),
            expected = R::SIZE,
            actual = data.len(),
            "ignoring trailing bytes"
        );
    }

    let record = decode(&data)?;
    info!(path = %path.display(), bytes = R::SIZE, "loaded");
    Ok(record)
}

/// Encodes `record` and writes it to `path`, replacing any previous content.
pub fn store<R: Record>(path: &Path, record: &R) -> Result<()> {
    let data = encode(record)?;
    fs::write(path, &data).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = data.len(), "stored");
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::codec::Opaque;
    use crate::codec::tests::noise;
    use insta::assert_debug_snapshot;
    use std::path::PathBuf;

    /// Fresh empty directory for one test.
    pub(crate) fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("pm3save-{}", std::process::id()))
            .join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn store_then_load_reproduces_bytes() {
        let dir = scratch_dir("io-round-trip");
        let path = dir.join("BLOB");
        let data = noise(32, 11);
        fs::write(&path, &data).unwrap();

        let blob: Opaque<32> = load(&path).unwrap();
        store(&path, &blob).unwrap();
        assert_eq!(fs::read(&path).unwrap(), data);
    }

    #[test]
    fn missing_file() {
        let dir = scratch_dir("io-missing");
        let err = load::<Opaque<4>>(&dir.join("NOPE")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn short_file() {
        let dir = scratch_dir("io-short");
        let path = dir.join("SHORT");
        fs::write(&path, [1, 2, 3]).unwrap();

        match load::<Opaque<4>>(&path).unwrap_err() {
            Error::ShortRead {
                expected, actual, ..
            } => assert_debug_snapshot!((expected, actual), @r###"
            (
                4,
                3,
            )
            "###),
            err => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let dir = scratch_dir("io-long");
        let path = dir.join("LONG");
        fs::write(&path, [1, 2, 3, 4, 5]).unwrap();

        let blob: Opaque<4> = load(&path).unwrap();
        assert_eq!(blob.0, [1, 2, 3, 4]);
    }

    #[test]
    fn store_into_missing_directory_fails() {
        let dir = scratch_dir("io-store");
        let err = store(&dir.join("no/such/FILE"), &Opaque([0u8; 4])).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
