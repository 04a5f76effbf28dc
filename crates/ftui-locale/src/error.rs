//! Error type shared by every store operation.

use std::fmt;
use std::path::PathBuf;

use crate::value::ValueKind;

/// Convenience alias used throughout the crate.
pub type Result<T, E = LocaleError> = std::result::Result<T, E>;

/// Errors from locale store operations.
///
/// None of these are recovered inside the crate; callers decide whether a
/// missing bundle means "try another locale" or "give up".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// A bundle for this `(namespace, locale)` pair is already registered.
    DuplicateBundle { namespace: String, locale: String },
    /// No bundle is registered for this `(namespace, locale)` pair.
    MissingBundle { namespace: String, locale: String },
    /// The same key appears twice in one bundle.
    DuplicateKey {
        namespace: String,
        locale: String,
        key: String,
    },
    /// The bundle exists but does not contain the key.
    MissingKey {
        namespace: String,
        locale: String,
        key: String,
    },
    /// A typed accessor found the other value kind.
    KindMismatch {
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },
    /// A list index past the end of a sequence value.
    IndexOutOfRange { key: String, index: usize, len: usize },
    /// A sequence-valued key whose length differs from its domain length.
    InvalidLength {
        key: String,
        expected: usize,
        found: usize,
    },
    /// A key from a sequence family (`months-*`, `days-*`, ...) holding a scalar.
    ScalarForSequence { key: String },
    /// A document or record could not be parsed.
    Parse(String),
    /// A data file or directory could not be read.
    Io { path: PathBuf, message: String },
}

impl LocaleError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Whether this error means "nothing registered here" rather than bad data.
    ///
    /// Callers implementing their own locale fallback use this to decide
    /// whether to try the next locale in their chain.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingBundle { .. } | Self::MissingKey { .. })
    }
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateBundle { namespace, locale } => {
                write!(f, "bundle '{namespace}/{locale}' is already registered")
            }
            Self::MissingBundle { namespace, locale } => {
                write!(f, "no bundle registered for '{namespace}/{locale}'")
            }
            Self::DuplicateKey {
                namespace,
                locale,
                key,
            } => write!(f, "duplicate key '{key}' in bundle '{namespace}/{locale}'"),
            Self::MissingKey {
                namespace,
                locale,
                key,
            } => write!(f, "key '{key}' not found in bundle '{namespace}/{locale}'"),
            Self::KindMismatch {
                key,
                expected,
                found,
            } => write!(f, "key '{key}' holds a {found}, expected a {expected}"),
            Self::IndexOutOfRange { key, index, len } => {
                write!(f, "index {index} out of range for '{key}' (len {len})")
            }
            Self::InvalidLength {
                key,
                expected,
                found,
            } => write!(f, "'{key}' must have {expected} entries, found {found}"),
            Self::ScalarForSequence { key } => {
                write!(f, "'{key}' must be a list of strings, found a single string")
            }
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Io { path, message } => write!(f, "{}: {message}", path.display()),
        }
    }
}

impl std::error::Error for LocaleError {}

impl From<serde_json::Error> for LocaleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
