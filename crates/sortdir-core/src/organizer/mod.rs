//! Move one file into a sibling subfolder chosen by the grouping method.
//!
//! Each call is a single attempt with two independent failure points (folder
//! creation, rename). Failures are logged here and returned to the caller as an
//! [`OrganizeError`]; they never abort the surrounding scan.

mod error;
mod naming;

pub use error::OrganizeError;
pub use naming::{
    date_folder, destination_name, extension_folder, GroupingMethod, NO_EXTENSION_FOLDER,
};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What happened to a file that was handled successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file was renamed into its folder.
    Moved { from: PathBuf, to: PathBuf },
    /// Dry run: the file would have been renamed. Nothing was touched.
    WouldMove { from: PathBuf, to: PathBuf },
}

/// Per-file result: success, or skipped because of an error.
pub type FileResult = Result<Outcome, OrganizeError>;

/// Compute `file`'s destination and move it there (or only log it when `dry_run`).
pub fn organize_file(file: &Path, method: GroupingMethod, dry_run: bool) -> FileResult {
    let result = try_organize(file, method, dry_run);
    match &result {
        Ok(Outcome::Moved { from, to }) => {
            tracing::info!("Moved: {} -> {}", from.display(), to.display());
        }
        Ok(Outcome::WouldMove { from, to }) => {
            tracing::info!("[DRY-RUN] Would move: {} -> {}", from.display(), to.display());
        }
        Err(err) => tracing::error!("{err}"),
    }
    result
}

fn try_organize(file: &Path, method: GroupingMethod, dry_run: bool) -> FileResult {
    let other = |source: io::Error| OrganizeError::Other {
        path: file.to_path_buf(),
        source,
    };

    let file_name = file.file_name().ok_or_else(|| {
        other(io::Error::new(
            io::ErrorKind::InvalidInput,
            "path has no file name",
        ))
    })?;
    let folder_name = destination_name(file, method).map_err(other)?;
    let parent = file.parent().unwrap_or_else(|| Path::new("."));
    let folder = parent.join(folder_name);
    let target = folder.join(file_name);

    let create_failed = |source: io::Error| OrganizeError::CreateFolder {
        file: file.to_path_buf(),
        folder: folder.clone(),
        source,
    };

    if dry_run {
        // Report the conflict a real run would hit, without creating anything.
        check_folder(&folder).map_err(create_failed)?;
        return Ok(Outcome::WouldMove {
            from: file.to_path_buf(),
            to: target,
        });
    }

    ensure_folder(&folder).map_err(create_failed)?;

    move_no_clobber(file, &target).map_err(|source| OrganizeError::Move {
        from: file.to_path_buf(),
        to: target.clone(),
        source,
    })?;

    Ok(Outcome::Moved {
        from: file.to_path_buf(),
        to: target,
    })
}

/// Create `folder` if absent. An existing directory is fine; anything else there is an error.
fn ensure_folder(folder: &Path) -> io::Result<()> {
    match fs::create_dir(folder) {
        Ok(()) => {
            tracing::debug!(folder = %folder.display(), "created folder");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && folder.is_dir() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Fails if something other than a directory already holds `folder`'s name.
fn check_folder(folder: &Path) -> io::Result<()> {
    if folder.exists() && !folder.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a folder", folder.display()),
        ));
    }
    Ok(())
}

/// Rename `from` to `to`, refusing to replace an existing entry.
fn move_no_clobber(from: &Path, to: &Path) -> io::Result<()> {
    if fs::symlink_metadata(to).is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("destination {} already exists", to.display()),
        ));
    }
    fs::rename(from, to)
}
