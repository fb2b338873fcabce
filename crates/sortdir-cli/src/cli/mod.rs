//! CLI for sortdir.

mod organize;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use sortdir_core::config::{self, SortdirConfig};
use sortdir_core::filter::ExtensionFilter;
use sortdir_core::logging;
use sortdir_core::organizer::GroupingMethod;
use sortdir_core::scan::RunOptions;
use std::path::PathBuf;

use organize::run_organize;

/// Move the files of a folder into subfolders by extension or modification date.
#[derive(Debug, Parser)]
#[command(name = "sortdir")]
#[command(about = "Organize files in a folder", long_about = None)]
pub struct Cli {
    /// Folder to organize.
    #[arg(long, value_name = "DIR")]
    pub source: PathBuf,

    /// Don't actually move files; log what would be moved.
    #[arg(long)]
    pub dry_run: bool,

    /// Only organize these file types (case-insensitive). Space or comma separated; a leading dot is optional.
    #[arg(long, num_args = 0.., value_delimiter = ',', value_name = "EXT")]
    pub extensions: Option<Vec<String>>,

    /// How to organize files [default: extension].
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,

    /// Config file to read instead of ~/.config/sortdir/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// `--method` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// One folder per file extension.
    Extension,
    /// One folder per modification date (YYYY-MM-DD).
    Date,
}

impl From<MethodArg> for GroupingMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Extension => GroupingMethod::Extension,
            MethodArg::Date => GroupingMethod::Date,
        }
    }
}

impl Cli {
    /// Build run options: flags win over the config file, which wins over built-in defaults.
    pub fn run_options(&self, cfg: &SortdirConfig) -> RunOptions {
        let method = self
            .method
            .map(GroupingMethod::from)
            .or(cfg.method)
            .unwrap_or_default();
        // An explicit `--extensions` with no values disables a configured filter.
        let filter = match &self.extensions {
            Some(raw) => ExtensionFilter::from_raw(raw),
            None => cfg
                .extensions
                .as_ref()
                .and_then(|raw| ExtensionFilter::from_raw(raw)),
        };
        RunOptions {
            source: self.source.clone(),
            dry_run: self.dry_run,
            filter,
            method,
        }
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let cfg = match config::load(cli.config.as_deref()) {
            Ok(cfg) => cfg,
            Err(err) => {
                logging::init_logging_stderr(&SortdirConfig::default().log.level);
                return Err(err);
            }
        };
        if let Err(err) = logging::init_logging(&cfg.log) {
            logging::init_logging_stderr(&cfg.log.level);
            tracing::warn!("falling back to stderr logging: {:#}", err);
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let opts = cli.run_options(&cfg);
        run_organize(&opts)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
