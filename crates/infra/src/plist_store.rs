// crates/infra/src/plist_store.rs
//! [`DocumentStore`] backed by the `plist` crate.

pub mod convert;

use std::{io::Cursor, path::Path};

use plist_version_domain::Document;
use plist_version_ports::{DocumentEncoding, DocumentStore, LoadedDocument};
use plist_version_shared_kernel::{InfraResult, InfrastructureError, Result};

use crate::persistence::{FileReader, FileWriter};

const BINARY_MAGIC: &[u8] = b"bplist00";

/// Reads XML and binary property lists and writes them back whole.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlistDocumentStore;

impl PlistDocumentStore {
    pub fn new() -> Self {
        Self
    }

    /// Guess the encoding from the leading bytes.
    pub fn detect_encoding(bytes: &[u8]) -> DocumentEncoding {
        if bytes.starts_with(BINARY_MAGIC) {
            DocumentEncoding::Binary
        } else {
            DocumentEncoding::Xml
        }
    }

    /// Parse `bytes` into a document. `path` is only used in error messages.
    pub fn decode(path: &Path, bytes: &[u8]) -> InfraResult<LoadedDocument> {
        let encoding = Self::detect_encoding(bytes);
        let value = plist::Value::from_reader(Cursor::new(bytes)).map_err(|e| {
            InfrastructureError::MalformedDocument { path: path.to_path_buf(), details: e.to_string() }
        })?;
        let dict = value
            .into_dictionary()
            .ok_or_else(|| InfrastructureError::RootNotDictionary { path: path.to_path_buf() })?;
        let document = convert::document_from_plist(dict)?;
        Ok(LoadedDocument { document, encoding })
    }

    /// Serialize a document in the requested encoding.
    pub fn encode(document: &Document, encoding: DocumentEncoding) -> InfraResult<Vec<u8>> {
        let value = plist::Value::Dictionary(convert::document_to_plist(document));
        let mut buf = Vec::new();
        let written = match encoding {
            DocumentEncoding::Xml => value.to_writer_xml(&mut buf),
            DocumentEncoding::Binary => value.to_writer_binary(&mut buf),
        };
        written.map_err(|e| InfrastructureError::Serialization {
            format: encoding.to_string(),
            details: e.to_string(),
        })?;
        Ok(buf)
    }
}

impl DocumentStore for PlistDocumentStore {
    fn load(&self, path: &Path) -> Result<LoadedDocument> {
        let bytes = FileReader::read_to_end(path)?;
        let loaded = Self::decode(path, &bytes)?;
        tracing::debug!(
            path = %path.display(),
            encoding = %loaded.encoding,
            keys = loaded.document.len(),
            "parsed property list"
        );
        Ok(loaded)
    }

    fn save(&self, path: &Path, document: &Document, encoding: DocumentEncoding) -> Result<()> {
        let bytes = Self::encode(document, encoding)?;
        FileWriter::atomic_write(path, &bytes)?;
        Ok(())
    }
}
