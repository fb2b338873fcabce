//! Destination folder names.

use chrono::{DateTime, Local};
use serde::Deserialize;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Folder used for files that have no extension (`Makefile`, `.bashrc`, `notes.`).
pub const NO_EXTENSION_FOLDER: &str = "no_extension";

/// How files are grouped into subfolders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMethod {
    /// One folder per extension, case preserved (`JPG` and `jpg` are different folders).
    #[default]
    Extension,
    /// One folder per local calendar date of last modification (`2024-03-11`).
    Date,
}

impl fmt::Display for GroupingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingMethod::Extension => write!(f, "extension"),
            GroupingMethod::Date => write!(f, "date"),
        }
    }
}

/// Extension without the leading dot, byte for byte, or [`NO_EXTENSION_FOLDER`].
pub fn extension_folder(path: &Path) -> OsString {
    match path.extension() {
        Some(ext) if !ext.is_empty() => ext.to_os_string(),
        _ => OsString::from(NO_EXTENSION_FOLDER),
    }
}

/// `YYYY-MM-DD` of `mtime` in local time.
pub fn date_folder(mtime: SystemTime) -> String {
    let local: DateTime<Local> = mtime.into();
    local.date_naive().format("%Y-%m-%d").to_string()
}

/// Name of the sibling folder `path` belongs in. Only `Date` touches the filesystem.
pub fn destination_name(path: &Path, method: GroupingMethod) -> io::Result<OsString> {
    match method {
        GroupingMethod::Extension => Ok(extension_folder(path)),
        GroupingMethod::Date => {
            let mtime = fs::metadata(path)?.modified()?;
            Ok(date_folder(mtime).into())
        }
    }
}
