//! File system abstraction layer
//!
//! The configuration core only touches the disk through [`FileSystem`], so
//! the same load/save/reset logic runs against the real file system in the
//! editor and against an in-memory implementation in tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// File operations consumed by the configuration core
pub trait FileSystem {
    /// Check whether a regular file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as raw bytes
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the contents of `path` with `contents`
    ///
    /// On failure the previous contents of `path` must still be in place.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Byte-copy `src` over `dst`, leaving `dst` untouched on failure
    fn copy(&self, src: &Path, dst: &Path) -> io::Result<()>;

    /// Create a directory and all of its parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).write(path, contents)
    }

    fn copy(&self, src: &Path, dst: &Path) -> io::Result<()> {
        (**self).copy(src, dst)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }
}

/// [`FileSystem`] backed by `std::fs`
///
/// Writes go to a sibling temporary file that is renamed over the target,
/// so an interrupted write never leaves a truncated configuration file.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    fn temp_path(path: &Path) -> PathBuf {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.with_file_name(format!(".{name}.tmp"))
    }
}

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let temp = Self::temp_path(path);
        if let Err(e) = fs::write(&temp, contents).and_then(|_| fs::rename(&temp, path)) {
            if temp.exists()
                && let Err(cleanup) = fs::remove_file(&temp)
            {
                warn!(path = %temp.display(), error = %cleanup, "Failed to remove temporary file");
            }
            return Err(e);
        }
        debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
        Ok(())
    }

    fn copy(&self, src: &Path, dst: &Path) -> io::Result<()> {
        let bytes = fs::read(src)?;
        self.write(dst, &bytes)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}
