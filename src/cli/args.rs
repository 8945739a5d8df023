// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use super::value_enum::{CliFormat, CliTarget};

#[derive(Parser, Debug)]
#[command(
    name = "plist_version",
    version,
    about = "Read, bump or overwrite the bundle version of a property list",
    disable_version_flag = true
)]
pub struct Args {
    /// Version field to work on
    #[arg(value_enum, value_name = "TYPE")]
    pub target: CliTarget,

    /// Property list to read or edit
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Value to store; `inc` bumps the leading number. Omit to only read.
    /// Use `--version=-VALUE` for values that start with `-` and are not numbers.
    #[arg(short = 'v', long = "version", value_name = "VALUE", allow_negative_numbers = true)]
    pub value: Option<String>,

    /// Encoding used when writing the file back
    #[arg(long, value_enum, default_value_t = CliFormat::Auto)]
    pub format: CliFormat,

    /// Log filter, e.g. `debug` (logs go to stderr)
    #[arg(long, value_name = "FILTER", env = "PLIST_VERSION_LOG")]
    pub log_level: Option<String>,

    /// Print the tool version
    #[arg(short = 'V', long = "tool-version", action = ArgAction::Version)]
    tool_version: (),
}
