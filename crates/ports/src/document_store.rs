// crates/ports/src/document_store.rs
use std::{fmt, path::Path};

use plist_version_domain::Document;
use plist_version_shared_kernel::Result;

/// On-disk serialization of a property list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEncoding {
    Xml,
    Binary,
}

impl fmt::Display for DocumentEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Xml => "XML",
            Self::Binary => "binary",
        })
    }
}

/// A document together with the encoding it was read in.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub document: Document,
    pub encoding: DocumentEncoding,
}

/// Port for reading and writing whole documents.
pub trait DocumentStore: Send + Sync {
    /// Load the document at `path`.
    fn load(&self, path: &Path) -> Result<LoadedDocument>;

    /// Replace the document at `path` with `document`, serialized as `encoding`.
    fn save(&self, path: &Path, document: &Document, encoding: DocumentEncoding) -> Result<()>;
}
