// src/config.rs
use std::path::PathBuf;

use plist_version_domain::{VersionTarget, WriteMode};
use plist_version_usecase::{EncodingPolicy, UpdateRequest};

use crate::cli::Args;

/// Filter applied when neither `--log-level` nor `PLIST_VERSION_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub target: VersionTarget,
    pub path: PathBuf,
    pub mode: Option<WriteMode>,
    pub encoding: EncodingPolicy,
    pub log_filter: String,
}

impl Config {
    pub fn request(&self) -> UpdateRequest {
        UpdateRequest {
            path: self.path.clone(),
            target: self.target,
            mode: self.mode.clone(),
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            target: args.target.into(),
            path: args.file,
            mode: WriteMode::parse(args.value.as_deref()),
            encoding: args.format.into(),
            log_filter: args
                .log_level
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
