// src/cli/value_enum.rs
use clap::ValueEnum;
use plist_version_domain::VersionTarget;
use plist_version_ports::DocumentEncoding;
use plist_version_usecase::EncodingPolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliTarget {
    /// CFBundleVersion
    Build,
    /// CFBundleShortVersionString
    Release,
}

impl From<CliTarget> for VersionTarget {
    fn from(value: CliTarget) -> Self {
        match value {
            CliTarget::Build => VersionTarget::Build,
            CliTarget::Release => VersionTarget::Release,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliFormat {
    /// Keep the encoding the file was read in
    #[default]
    Auto,
    Xml,
    Binary,
}

impl From<CliFormat> for EncodingPolicy {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Auto => EncodingPolicy::Preserve,
            CliFormat::Xml => EncodingPolicy::Force(DocumentEncoding::Xml),
            CliFormat::Binary => EncodingPolicy::Force(DocumentEncoding::Binary),
        }
    }
}
