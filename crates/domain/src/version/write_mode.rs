// crates/domain/src/version/write_mode.rs
use plist_version_shared_kernel::{DomainError, DomainResult};

use crate::model::{Document, Value};

/// Literal that selects [`WriteMode::Increment`].
pub const INCREMENT_KEYWORD: &str = "inc";

/// How a requested write changes the version field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteMode {
    /// Bump the leading integer segment, dropping the rest.
    Increment,
    /// Store the value verbatim.
    SetLiteral(String),
}

impl WriteMode {
    /// Build the mode from the raw command-line value. `None` means read-only.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.map(Self::from)
    }

    /// Compute the new field value from the current one.
    pub fn apply(&self, current: &str) -> DomainResult<String> {
        match self {
            Self::Increment => increment_major(current),
            Self::SetLiteral(value) => Ok(value.clone()),
        }
    }

    /// Rewrite `key` in `document` and return the value it held before.
    ///
    /// `Increment` needs a string to parse; `SetLiteral` replaces whatever
    /// the key holds. The key must exist in both cases and the document is
    /// left untouched on error.
    pub fn apply_to(&self, document: &mut Document, key: &str) -> DomainResult<Value> {
        let next = match self {
            Self::Increment => increment_major(document.require_str(key)?)?,
            Self::SetLiteral(value) => {
                document.require(key)?;
                value.clone()
            }
        };
        document.replace(key, Value::String(next))
    }
}

impl From<&str> for WriteMode {
    fn from(raw: &str) -> Self {
        if raw == INCREMENT_KEYWORD {
            Self::Increment
        } else {
            Self::SetLiteral(raw.to_owned())
        }
    }
}

/// Parse the first dot-separated segment as a base-10 integer and add one.
///
/// Every segment after the first is discarded: `"5.2.9"` becomes `"6"`.
/// The integer has no size limit and may be padded with whitespace, carry a
/// sign, or group digits with single underscores (`"1_000"`).
pub fn increment_major(current: &str) -> DomainResult<String> {
    let segment = current.split('.').next().unwrap_or_default();
    let (negative, magnitude) =
        parse_integer(segment.trim()).ok_or_else(|| DomainError::InvalidVersionNumber {
            value: current.to_owned(),
            segment: segment.to_owned(),
        })?;

    if !negative {
        return Ok(add_one(&magnitude));
    }
    // -n + 1 == -(n - 1); n >= 1 here.
    let reduced = sub_one(&magnitude);
    Ok(if reduced == "0" { reduced } else { format!("-{reduced}") })
}

/// Sign and canonical digit string (no leading zeros) of a decimal literal.
fn parse_integer(text: &str) -> Option<(bool, String)> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if body.is_empty() || body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return None;
    }

    let digits: String = body.chars().filter(|&c| c != '_').collect();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude = match digits.trim_start_matches('0') {
        "" => "0",
        significant => significant,
    };
    Some((negative && magnitude != "0", magnitude.to_owned()))
}

fn add_one(digits: &str) -> String {
    let mut out = digits.as_bytes().to_vec();
    for b in out.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8(out).unwrap_or_default();
        }
    }
    out.insert(0, b'1');
    String::from_utf8(out).unwrap_or_default()
}

fn sub_one(digits: &str) -> String {
    let mut out = digits.as_bytes().to_vec();
    for b in out.iter_mut().rev() {
        if *b == b'0' {
            *b = b'9';
        } else {
            *b -= 1;
            break;
        }
    }
    let text = String::from_utf8(out).unwrap_or_default();
    match text.trim_start_matches('0') {
        "" => "0".to_owned(),
        significant => significant.to_owned(),
    }
}
