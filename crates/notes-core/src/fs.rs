//! Crash-safe file replacement for exports.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace `path` with `data` so readers never see a half-written file.
///
/// The bytes land in a synced temp file beside the target, which is then
/// renamed over it. A failed write leaves the old file untouched and the
/// temp file is removed when it drops.
pub fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    if path.file_name().is_none() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Not a file path: {}", path.display()),
        ));
    }

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(data)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_creates_missing_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("page.html");

        write_atomic(&dest, b"<p>hi</p>").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_replaces_existing_without_leftovers() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("export.json");
        fs::write(&dest, "old").unwrap();

        write_atomic(&dest, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_rejects_directory_target() {
        let dir = tempdir().unwrap();
        let err = write_atomic(&dir.path().join(".."), b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
