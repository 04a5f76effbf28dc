//! Resource values: a single string or an ordered list of strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single resource value.
///
/// Lists are index-addressed in domain order: index 0 is January for
/// `months-*`, Sunday for `days-*`, the first quarter for `quarters-*`, and
/// the earlier era for `era*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A scalar string such as a separator or a pattern.
    Text(String),
    /// An ordered sequence such as month or day names.
    List(Vec<String>),
}

/// Which variant a [`Value`] holds. Used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "string",
            Self::List => "list",
        })
    }
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::List(_) => ValueKind::List,
        }
    }

    /// The scalar string, if this is a [`Value::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// The sequence, if this is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(items: [&str; N]) -> Self {
        Self::List(items.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// Fixed sequence length for keys of a known family, if any.
///
/// `months-*` → 12, `days-*` → 7, `quarters-*` → 4, `eraNames` /
/// `eraAbbr` / `eraNarrow` → 2. Keys outside these families are
/// unconstrained and may hold either kind.
#[must_use]
pub fn sequence_len(key: &str) -> Option<usize> {
    if key.starts_with("months-") {
        Some(12)
    } else if key.starts_with("days-") {
        Some(7)
    } else if key.starts_with("quarters-") {
        Some(4)
    } else if key
        .strip_prefix("era")
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
    {
        Some(2)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_shapes() {
        let text: Value = serde_json::from_str(r#"",""#).unwrap();
        assert_eq!(text, Value::Text(",".into()));

        let list: Value = serde_json::from_str(r#"["f.Kr.", "e.Kr."]"#).unwrap();
        assert_eq!(list, Value::from(["f.Kr.", "e.Kr."]));
    }

    #[test]
    fn rejects_non_string_json() {
        assert!(serde_json::from_str::<Value>("3").is_err());
        assert!(serde_json::from_str::<Value>(r#"{"a": "b"}"#).is_err());
        assert!(serde_json::from_str::<Value>(r#"["a", 1]"#).is_err());
    }

    #[test]
    fn accessors_match_kind() {
        let v = Value::from("år");
        assert_eq!(v.kind(), ValueKind::Text);
        assert_eq!(v.as_text(), Some("år"));
        assert!(v.as_list().is_none());

        let v = Value::from(["K1", "K2", "K3", "K4"]);
        assert_eq!(v.kind(), ValueKind::List);
        assert_eq!(v.as_list().map(<[String]>::len), Some(4));
        assert!(v.as_text().is_none());
    }

    #[test]
    fn sequence_families() {
        assert_eq!(sequence_len("months-format-wide"), Some(12));
        assert_eq!(sequence_len("months-standAlone-narrow"), Some(12));
        assert_eq!(sequence_len("days-format-abbr"), Some(7));
        assert_eq!(sequence_len("quarters-standAlone-wide"), Some(4));
        assert_eq!(sequence_len("eraNames"), Some(2));
        assert_eq!(sequence_len("eraNarrow"), Some(2));
        assert_eq!(sequence_len("field-era"), None);
        assert_eq!(sequence_len("erase"), None);
        assert_eq!(sequence_len("dayPeriods-format-wide-am"), None);
        assert_eq!(sequence_len("decimal"), None);
    }
}
