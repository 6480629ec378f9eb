//! Identifier fragments
//!
//! Platform, logical name and suffix are spliced into a C identifier
//! (`_<platform>_<name>_<suffix>`) and into a file name, so each part is
//! restricted to ASCII letters, digits and single inner underscores. C++
//! reserves names containing `__` and names starting with `_` plus an
//! uppercase letter; a fragment must not produce either once joined.

use std::fmt;

use thiserror::Error;

/// Why a fragment cannot be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidIdentifier {
    #[error("must not be empty")]
    Empty,
    #[error("expected letters, digits or '_'")]
    Character,
    #[error("'_' must not lead, trail or repeat")]
    Underscore,
    #[error("must not start with an uppercase letter")]
    UppercaseStart,
}

/// A non-empty `[A-Za-z0-9]+(_[A-Za-z0-9]+)*` fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Validate a name or suffix fragment
    pub fn parse(value: &str) -> Result<Self, InvalidIdentifier> {
        if value.is_empty() {
            return Err(InvalidIdentifier::Empty);
        }
        if !value.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(InvalidIdentifier::Character);
        }
        if value.starts_with('_') || value.ends_with('_') || value.contains("__") {
            return Err(InvalidIdentifier::Underscore);
        }
        Ok(Self(value.to_string()))
    }

    /// Validate a platform fragment; it follows the leading `_` of the
    /// constant, so it must not start uppercase.
    pub fn parse_platform(value: &str) -> Result<Self, InvalidIdentifier> {
        let id = Self::parse(value)?;
        if id.0.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Err(InvalidIdentifier::UppercaseStart);
        }
        Ok(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
