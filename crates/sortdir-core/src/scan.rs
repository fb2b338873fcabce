//! One pass over a directory: validate, list, filter, organize each file.
//!
//! Only the upfront validation is fatal. Every per-file failure is counted in the
//! [`RunSummary`] and the scan moves on to the next entry.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::filter::ExtensionFilter;
use crate::organizer::{self, GroupingMethod, Outcome};

/// Immutable options for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory whose immediate children are organized.
    pub source: PathBuf,
    /// Log intended moves without touching the filesystem.
    pub dry_run: bool,
    /// Only files whose extension is allowed are processed; `None` processes everything.
    pub filter: Option<ExtensionFilter>,
    pub method: GroupingMethod,
}

/// Fatal configuration errors: nothing has been processed when these are returned.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("source folder does not exist or is not a folder: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot list source folder {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Tally of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub moved: usize,
    /// Dry-run moves that were only logged.
    pub planned: usize,
    pub failed: usize,
    /// Files skipped by the extension filter.
    pub filtered: usize,
    /// Subdirectories, never touched.
    pub directories: usize,
}

impl RunSummary {
    fn record(&mut self, result: &organizer::FileResult) {
        match result {
            Ok(Outcome::Moved { .. }) => self.moved += 1,
            Ok(Outcome::WouldMove { .. }) => self.planned += 1,
            Err(_) => self.failed += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} moved, {} planned, {} failed, {} filtered out, {} folders skipped",
            self.moved, self.planned, self.failed, self.filtered, self.directories
        )
    }
}

/// Fails unless `source` exists and is a directory.
pub fn validate_source(source: &Path) -> Result<(), ScanError> {
    if source.is_dir() {
        Ok(())
    } else {
        Err(ScanError::NotADirectory(source.to_path_buf()))
    }
}

/// Organize the immediate, non-directory children of `opts.source`.
///
/// Entries are listed once up front, so folders created during the run are never
/// revisited.
pub fn run(opts: &RunOptions) -> Result<RunSummary, ScanError> {
    validate_source(&opts.source)?;
    let entries = fs::read_dir(&opts.source).map_err(|source| ScanError::List {
        path: opts.source.clone(),
        source,
    })?;
    let entries: Vec<io::Result<fs::DirEntry>> = entries.collect();
    tracing::debug!(
        source = %opts.source.display(),
        entries = entries.len(),
        method = %opts.method,
        dry_run = opts.dry_run,
        "scanning"
    );

    let mut summary = RunSummary::default();
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                tracing::error!(
                    "Error handling file in {}: {}",
                    opts.source.display(),
                    e
                );
                summary.failed += 1;
                continue;
            }
        };

        // Follows symlinks: a link to a directory is treated as one.
        if path.is_dir() {
            summary.directories += 1;
            continue;
        }
        if let Some(filter) = &opts.filter {
            if !filter.matches(&path) {
                tracing::debug!(path = %path.display(), "filtered out");
                summary.filtered += 1;
                continue;
            }
        }

        let result = organizer::organize_file(&path, opts.method, opts.dry_run);
        summary.record(&result);
    }

    Ok(summary)
}
