//! Case-insensitive extension allow-list.

use std::collections::HashSet;
use std::path::Path;

/// Set of lowercase extensions (without the leading dot) a file must have to be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    allowed: HashSet<String>,
}

impl ExtensionFilter {
    /// Build a filter from raw user input (`txt`, `.TXT`, ` jpg `).
    ///
    /// Returns `None` when nothing usable remains, which means "process every file".
    pub fn from_raw<I, S>(raw: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed: HashSet<String> = raw
            .into_iter()
            .filter_map(|s| {
                let ext = s.as_ref().trim();
                let ext = ext.strip_prefix('.').unwrap_or(ext);
                (!ext.is_empty()).then(|| ext.to_lowercase())
            })
            .collect();
        if allowed.is_empty() {
            None
        } else {
            Some(Self { allowed })
        }
    }

    /// True if the file's extension, lowercased, is in the allow-list.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.allowed.contains(&ext))
    }
}
