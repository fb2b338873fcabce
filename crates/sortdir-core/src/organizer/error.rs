//! Per-file failure kinds. None of them abort a scan.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single file was left where it was.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The destination folder could not be created (permissions, a non-directory
    /// already occupying the name, ...).
    #[error("Couldn't create folder {}: {source}", folder.display())]
    CreateFolder {
        file: PathBuf,
        folder: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rename failed or the destination was already taken. The file stays in place.
    #[error("Failed to move {}: {source}", from.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Anything else while handling the file (e.g. reading its metadata).
    #[error("Error handling file {}: {source}", path.display())]
    Other {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
