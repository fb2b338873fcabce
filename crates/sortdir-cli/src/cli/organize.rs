//! `sortdir --source DIR` – one organize pass over a folder.

use anyhow::Result;
use sortdir_core::scan::{self, RunOptions, RunSummary};

/// Scan `opts.source` and log the tally. Only an unusable source folder is an error;
/// per-file failures are already logged and just counted.
pub fn run_organize(opts: &RunOptions) -> Result<RunSummary> {
    let summary = scan::run(opts)?;
    if opts.dry_run {
        tracing::info!("[DRY-RUN] Finished: {}", summary);
    } else {
        tracing::info!("Finished: {}", summary);
    }
    Ok(summary)
}
