//! Property-based tests for the locale store.
//!
//! 1. Every loaded value comes back unchanged.
//! 2. A second load of the same `(namespace, locale)` fails and keeps the first bundle.
//! 3. Lookups in an unregistered locale fail with `MissingBundle`.
//! 4. Lookups of an absent key in a registered bundle fail with `MissingKey`.
//! 5. Sequence families reject any length other than their domain length.
//! 6. Bundles parsed from JSON answer exactly like bundles loaded from pairs.

use std::collections::HashMap;

use ftui_locale::{LocaleError, LocaleStore, Value, source};
use proptest::prelude::*;

// ── Strategies ────────────────────────────────────────────────────────────

/// Keys outside every sequence family (all start with `k`).
fn key_strategy() -> impl Strategy<Value = String> {
    "k[a-z]{0,7}(-[a-zA-Z0-9+]{1,6}){0,2}"
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<String>().prop_map(Value::Text),
        prop::collection::vec(any::<String>(), 0..6).prop_map(Value::List),
    ]
}

fn entries_strategy() -> impl Strategy<Value = HashMap<String, Value>> {
    prop::collection::hash_map(key_strategy(), value_strategy(), 0..24)
}

fn tag_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2}(-[A-Z]{2})?"
}

fn family_strategy() -> impl Strategy<Value = (&'static str, usize)> {
    prop::sample::select(vec![
        ("months-format-wide", 12),
        ("months-standAlone-narrow", 12),
        ("days-format-abbr", 7),
        ("days-standAlone-wide", 7),
        ("quarters-format-narrow", 4),
        ("eraNames", 2),
        ("eraNarrow", 2),
    ])
}

// ── Properties ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn loaded_values_come_back_exactly(
        namespace in "[a-z]{1,10}",
        locale in tag_strategy(),
        entries in entries_strategy(),
    ) {
        let mut store = LocaleStore::new();
        store.load(&namespace, &locale, entries.clone()).unwrap();
        for (key, value) in &entries {
            prop_assert_eq!(store.get(&namespace, &locale, key), Ok(value));
        }
        prop_assert_eq!(store.bundle(&namespace, &locale).unwrap().len(), entries.len());
    }
}

proptest! {
    #[test]
    fn second_load_is_rejected(
        locale in tag_strategy(),
        first in entries_strategy(),
        second in entries_strategy(),
    ) {
        let mut store = LocaleStore::new();
        store.load("number", &locale, first.clone()).unwrap();
        let err = store.load("number", &locale, second).unwrap_err();
        prop_assert_eq!(
            err,
            LocaleError::DuplicateBundle {
                namespace: "number".into(),
                locale: locale.clone(),
            }
        );
        for (key, value) in &first {
            prop_assert_eq!(store.get("number", &locale, key), Ok(value));
        }
    }
}

proptest! {
    #[test]
    fn unregistered_locale_is_missing_bundle(
        loaded in tag_strategy(),
        other in tag_strategy(),
        key in key_strategy(),
        entries in entries_strategy(),
    ) {
        prop_assume!(loaded != other);
        let mut store = LocaleStore::new();
        store.load("gregorian", &loaded, entries).unwrap();
        prop_assert_eq!(
            store.get("gregorian", &other, &key),
            Err(LocaleError::MissingBundle {
                namespace: "gregorian".into(),
                locale: other.clone(),
            })
        );
    }
}

proptest! {
    #[test]
    fn absent_key_is_missing_key(
        entries in entries_strategy(),
        absent in "z[a-z]{0,8}",
    ) {
        let mut store = LocaleStore::new();
        store.load("validate", "da", entries).unwrap();
        let err = store.get("validate", "da", &absent).unwrap_err();
        prop_assert!(err.is_missing());
        prop_assert_eq!(
            err,
            LocaleError::MissingKey {
                namespace: "validate".into(),
                locale: "da".into(),
                key: absent.clone(),
            }
        );
    }
}

proptest! {
    #[test]
    fn sequence_families_enforce_length(
        (key, expected) in family_strategy(),
        len in 0usize..16,
    ) {
        let items: Vec<String> = (0..len).map(|i| i.to_string()).collect();
        let mut store = LocaleStore::new();
        let result = store.load("gregorian", "xx", [(key, Value::List(items))]);
        if len == expected {
            prop_assert!(result.is_ok());
            prop_assert_eq!(store.list("gregorian", "xx", key).unwrap().len(), expected);
        } else {
            prop_assert_eq!(
                result,
                Err(LocaleError::InvalidLength { key: key.into(), expected, found: len })
            );
            prop_assert!(!store.contains("gregorian", "xx"));
        }
    }
}

proptest! {
    #[test]
    fn json_record_matches_pairs(entries in entries_strategy()) {
        let json = serde_json::to_string(&entries).unwrap();
        let parsed = source::parse_record("number", "xx", &json).unwrap();
        for (key, value) in &entries {
            prop_assert_eq!(parsed.get(key), Ok(value));
        }
        prop_assert_eq!(parsed.len(), entries.len());
    }
}
