// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PlistVersionError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<PlistVersionError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, PlistVersionError>;

/// Coarse classification used by callers that only care about the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The document does not exist or cannot be read.
    NotFound,
    /// The document or the version value could not be interpreted.
    Parse,
    /// The requested field is absent from the top-level dictionary.
    Key,
    /// Writing the document back failed.
    Io,
}

impl PlistVersionError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Context { source, .. } => source.category(),
            Self::Domain(err) => err.category(),
            Self::Infrastructure(err) => err.category(),
        }
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Key '{key}' not found in the top-level dictionary")]
    KeyNotFound { key: String },

    #[error("Key '{key}' holds {found}, expected {expected}")]
    UnexpectedType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid version number '{value}': leading segment '{segment}' is not an integer")]
    InvalidVersionNumber { value: String, segment: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

impl DomainError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::KeyNotFound { .. } => ErrorCategory::Key,
            Self::UnexpectedType { .. } | Self::InvalidVersionNumber { .. } => ErrorCategory::Parse,
        }
    }
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("File '{path}' does not exist: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed property list '{path}': {details}")]
    MalformedDocument { path: PathBuf, details: String },

    #[error("Property list '{path}' does not have a dictionary at its root")]
    RootNotDictionary { path: PathBuf },

    #[error("Failed to serialize {format} property list: {details}")]
    Serialization { format: String, details: String },

    #[error("Unsupported property list value: {kind}")]
    UnsupportedValue { kind: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl InfrastructureError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } | Self::FileRead { .. } => ErrorCategory::NotFound,
            Self::FileWrite { .. } => ErrorCategory::Io,
            Self::MalformedDocument { .. }
            | Self::RootNotDictionary { .. }
            | Self::Serialization { .. }
            | Self::UnsupportedValue { .. } => ErrorCategory::Parse,
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PlistVersionError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PlistVersionError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PlistVersionError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
