// crates/usecase/src/update_version.rs
use std::path::{Path, PathBuf};

use plist_version_domain::{VersionTarget, WriteMode};
use plist_version_ports::{DocumentEncoding, DocumentStore, LoadedDocument};
use plist_version_shared_kernel::{ErrorContext, Result};

/// Encoding used when a modified document is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingPolicy {
    /// Keep whatever encoding the document was loaded in.
    #[default]
    Preserve,
    Force(DocumentEncoding),
}

impl EncodingPolicy {
    pub fn resolve(self, loaded: DocumentEncoding) -> DocumentEncoding {
        match self {
            Self::Preserve => loaded,
            Self::Force(encoding) => encoding,
        }
    }
}

/// One invocation of the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub path: PathBuf,
    pub target: VersionTarget,
    /// `None` reads the field without touching the file.
    pub mode: Option<WriteMode>,
}

pub struct UpdateVersionField<'a> {
    store: &'a dyn DocumentStore,
    policy: EncodingPolicy,
}

impl<'a> UpdateVersionField<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store, policy: EncodingPolicy::default() }
    }

    pub fn with_policy(mut self, policy: EncodingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn execute(&self, request: &UpdateRequest) -> Result<String> {
        self.update(&request.path, request.target.key(), request.mode.as_ref())
    }

    /// Read `key` from the document at `path`, applying `mode` first if given.
    ///
    /// Returns the value of the field after the write. The file is only
    /// rewritten once the new value has been computed successfully. An
    /// overwrite accepts a field of any type and stores the value as a string;
    /// reading and incrementing need the field to hold a string already.
    pub fn update(&self, path: &Path, key: &str, mode: Option<&WriteMode>) -> Result<String> {
        let LoadedDocument { mut document, encoding } = self.store.load(path)?;
        tracing::debug!(path = %path.display(), %encoding, key, "loaded document");

        if let Some(mode) = mode {
            let previous = mode
                .apply_to(&mut document, key)
                .with_context(|| format!("updating '{key}' in {}", path.display()))?;

            let target = self.policy.resolve(encoding);
            self.store.save(path, &document, target)?;
            tracing::info!(
                path = %path.display(),
                encoding = %target,
                key,
                previous = ?previous,
                "version field updated"
            );
        }

        let value = document
            .require_str(key)
            .with_context(|| format!("reading '{key}' from {}", path.display()))?;
        Ok(value.to_owned())
    }
}
