// src/app.rs
use anyhow::{Context, Result};
use plist_version_infra::PlistDocumentStore;
use plist_version_usecase::UpdateVersionField;

use crate::config::Config;

/// Run one read or update and return the resulting version value.
pub fn run(config: &Config) -> Result<String> {
    let store = PlistDocumentStore::new();
    let editor = UpdateVersionField::new(&store).with_policy(config.encoding);
    tracing::debug!(
        field = %config.target,
        path = %config.path.display(),
        mode = ?config.mode,
        "running"
    );

    editor
        .execute(&config.request())
        .with_context(|| format!("{} version of {}", config.target, config.path.display()))
}
