//! File system utilities for writing bundle metadata.
//!
//! Every output file is opened, written and flushed inside one scope so the
//! handle is released on all exit paths.
//!
//! Writers are synchronous. Async callers run them on the blocking pool.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::bundler::error::{ErrorExt, Result};

/// Creates (or truncates) `path` and hands a buffered writer to `write`.
///
/// The writer is flushed before returning. Parent directories are not
/// created; a missing parent surfaces as [`Error::Fs`](crate::bundler::Error::Fs).
pub fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let file = File::create(path).fs_context("failed to create file", path)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer.flush().fs_context("failed to flush file", path)?;
    Ok(())
}

/// Creates all of the directories of the specified path.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .fs_context("failed to create directory", path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_write_file_flushes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_file(&path, |w| {
            w.write_all(b"hello\n")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_write_file_missing_parent_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = write_file(&path, |_| Ok(())).unwrap_err();
        assert!(err.to_string().contains("out.txt"));
    }

    #[tokio::test]
    async fn test_create_dir_all_nested() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b");
        create_dir_all(&path).await.unwrap();
        assert!(path.is_dir());
    }
}
