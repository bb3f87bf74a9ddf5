//! Error taxonomy for configuration file operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::preset::Preset;

/// Failures surfaced by [`ConfigStore`](crate::config::ConfigStore) and
/// [`PresetResetter`](crate::config::preset::PresetResetter).
///
/// Malformed lines have no variant: the parser splits on the first
/// `=` and never rejects a line.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// A file that must already exist is missing (load target or seed source)
    #[error("required file not found: {}", .path.display())]
    MissingSourceFile { path: PathBuf },

    /// Writing a configuration file failed; the previous contents are kept
    #[error("failed to write {}", .path.display())]
    PartialWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Copying a preset over the active hotkey file failed
    #[error("failed to apply preset '{}'", .preset.label())]
    PresetCopyFailure {
        preset: Preset,
        #[source]
        source: io::Error,
    },

    /// Edited text cannot be written back in the file's original encoding
    #[error("{} is not UTF-8 and the edited text cannot be stored in its encoding", .path.display())]
    UnencodableText { path: PathBuf },

    /// Any other I/O failure while reading or preparing files
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigFileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ConfigFileError> = std::result::Result<T, E>;
