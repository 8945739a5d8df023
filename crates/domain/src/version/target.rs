// crates/domain/src/version/target.rs
use std::fmt;

/// Which of the two bundle version fields an invocation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionTarget {
    /// Internal build number.
    Build,
    /// User-facing release version.
    Release,
}

impl VersionTarget {
    pub const BUILD_KEY: &'static str = "CFBundleVersion";
    pub const RELEASE_KEY: &'static str = "CFBundleShortVersionString";

    /// Key of the targeted field in the top-level dictionary.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Build => Self::BUILD_KEY,
            Self::Release => Self::RELEASE_KEY,
        }
    }
}

impl fmt::Display for VersionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Build => "build",
            Self::Release => "release",
        };
        f.write_str(name)
    }
}
