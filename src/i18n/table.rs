//! The runtime string table handed to the UI layer.
//!
//! A `LocalizedStringTable` is built once, either from a compiled table or
//! from entries loaded out of a resource file, and is read-only afterwards.
//! Construction checks completeness so `lookup` never fails.

use crate::error::StringTableError;
use crate::i18n::{Language, LookupMetrics, StringKey};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedStringTable {
    language: Language,
    /// One value per key, indexed by `StringKey::index`
    values: Box<[String]>,
}

impl LocalizedStringTable {
    /// Copy the compiled table of `language`.
    pub fn builtin(language: Language) -> Self {
        let strings = language.strings();
        let values = StringKey::ALL
            .iter()
            .map(|key| strings.get(*key).to_string())
            .collect();
        debug!(language = language.code(), "Loaded built-in string table");
        Self { language, values }
    }

    /// Build a table from `(key, value)` pairs.
    ///
    /// Every key must appear exactly once with a non-empty value. Duplicates
    /// report their 1-based position in `entries` as the line.
    pub fn from_entries<I>(language: Language, entries: I) -> Result<Self, StringTableError>
    where
        I: IntoIterator<Item = (StringKey, String)>,
    {
        let mut slots: Vec<Option<String>> = vec![None; StringKey::COUNT];

        for (position, (key, value)) in entries.into_iter().enumerate() {
            if value.is_empty() {
                return Err(StringTableError::EmptyValue {
                    key: key.legacy_name(),
                });
            }
            let slot = &mut slots[key.index()];
            if slot.is_some() {
                return Err(StringTableError::DuplicateKey {
                    key: key.legacy_name(),
                    line: position + 1,
                });
            }
            *slot = Some(value);
        }

        let values = StringKey::ALL
            .iter()
            .zip(slots)
            .map(|(key, slot)| {
                slot.ok_or(StringTableError::MissingTranslationKey {
                    language: language.code(),
                    key: key.legacy_name(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            language,
            values: values.into_boxed_slice(),
        })
    }

    /// Display string for `key` in this table's language.
    pub fn lookup(&self, key: StringKey) -> &str {
        LookupMetrics::global().record_lookup();
        &self.values[key.index()]
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (StringKey, &str)> + '_ {
        StringKey::ALL
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a constructed table defines every key.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turkish_entries() -> Vec<(StringKey, String)> {
        LocalizedStringTable::builtin(Language::TURKISH)
            .iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect()
    }

    // ==================== Built-in Tests ====================

    #[test]
    fn test_builtin_turkish_lookup() {
        let table = LocalizedStringTable::builtin(Language::TURKISH);
        assert_eq!(table.lookup(StringKey::Delete), "Sil");
        assert_eq!(table.lookup(StringKey::FileManager), "Dosya Yöneticisi");
        assert_eq!(table.language(), Language::TURKISH);
    }

    #[test]
    fn test_builtin_is_complete() {
        let table = LocalizedStringTable::builtin(Language::TURKISH);
        assert_eq!(table.len(), StringKey::COUNT);
        assert!(!table.is_empty());
        for key in StringKey::ALL {
            assert!(!table.lookup(*key).is_empty());
        }
    }

    #[test]
    fn test_lookup_is_stable() {
        let table = LocalizedStringTable::builtin(Language::TURKISH);
        let first = table.lookup(StringKey::Paste);
        let second = table.lookup(StringKey::Paste);
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_iter_follows_key_order() {
        let table = LocalizedStringTable::builtin(Language::ENGLISH);
        let keys: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, StringKey::ALL.to_vec());
    }

    #[test]
    fn test_table_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LocalizedStringTable>();
    }

    // ==================== from_entries Tests ====================

    #[test]
    fn test_from_entries_matches_builtin() {
        let table = LocalizedStringTable::from_entries(Language::TURKISH, turkish_entries()).unwrap();
        assert_eq!(table, LocalizedStringTable::builtin(Language::TURKISH));
    }

    #[test]
    fn test_from_entries_order_does_not_matter() {
        let mut entries = turkish_entries();
        entries.reverse();
        let table = LocalizedStringTable::from_entries(Language::TURKISH, entries).unwrap();
        assert_eq!(table.lookup(StringKey::Back), "Geri");
    }

    #[test]
    fn test_from_entries_missing_key() {
        let entries = turkish_entries()
            .into_iter()
            .filter(|(k, _)| *k != StringKey::Sort);
        let err = LocalizedStringTable::from_entries(Language::TURKISH, entries).unwrap_err();
        assert_eq!(
            err,
            StringTableError::MissingTranslationKey {
                language: "tr",
                key: "STRING_SORT",
            }
        );
    }

    #[test]
    fn test_from_entries_duplicate_key() {
        let mut entries = turkish_entries();
        entries.push((StringKey::Cut, "Kes".to_string()));
        let err = LocalizedStringTable::from_entries(Language::TURKISH, entries).unwrap_err();
        assert_eq!(
            err,
            StringTableError::DuplicateKey {
                key: "STRING_CUT",
                line: StringKey::COUNT + 1,
            }
        );
    }

    #[test]
    fn test_from_entries_empty_value() {
        let mut entries = turkish_entries();
        entries[0].1.clear();
        let err = LocalizedStringTable::from_entries(Language::TURKISH, entries).unwrap_err();
        assert_eq!(err, StringTableError::EmptyValue { key: "STRING_BACK" });
    }
}
