//! CLI parse and option-merge tests.

use super::{Cli, MethodArg};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

mod parse;
