//! Integration tests for the FreeDOS TUI shell string tables
//!
//! These tests go through the public API only: language selection, table
//! construction, legacy header loading, and export.

use fdostui_strings::config::Config;
use fdostui_strings::i18n::{
    load_header_file, render_header, to_json, CodePage, LanguageRegistry, LegacyHeader,
    TranslationValidator,
};
use fdostui_strings::{Language, LocalizedStringTable, StringKey, StringTableError};
use std::collections::HashSet;
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// Write the Turkish table as a CP857 header into `dir`
fn write_turkish_header(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("tr.h");
    let table = LocalizedStringTable::builtin(Language::TURKISH);
    std::fs::write(&path, render_header(&table).expect("Turkish fits CP857"))
        .expect("Failed to write header");
    path
}

// ==================== Scenario Tests ====================

#[test]
fn test_turkish_scenario_strings() {
    let table = LocalizedStringTable::builtin(Language::from_selector(2).unwrap());

    assert_eq!(table.lookup(StringKey::Delete), "Sil");
    assert_eq!(table.lookup(StringKey::FileManager), "Dosya Yöneticisi");
}

#[test]
fn test_every_key_defined_in_every_language() {
    for config in LanguageRegistry::get().list_enabled() {
        let table = LocalizedStringTable::builtin(Language::from_code(config.code).unwrap());
        for key in StringKey::ALL {
            assert!(
                !table.lookup(*key).is_empty(),
                "{} missing in {}",
                key,
                config.code
            );
        }
    }
}

#[test]
fn test_keys_are_unique() {
    let unique: HashSet<_> = StringKey::ALL.iter().collect();
    assert_eq!(unique.len(), StringKey::ALL.len());
}

#[test]
fn test_repeated_lookups_are_identical() {
    let table = LocalizedStringTable::builtin(Language::TURKISH);
    let before: Vec<String> = table.iter().map(|(_, v)| v.to_string()).collect();
    for _ in 0..3 {
        let again: Vec<String> = table.iter().map(|(_, v)| v.to_string()).collect();
        assert_eq!(before, again);
    }
}

// ==================== Selection Tests ====================

#[test]
fn test_turkish_selector_picks_only_turkish() {
    let selected = Language::from_selector(2).unwrap();
    assert_eq!(selected, Language::TURKISH);

    let matches = LanguageRegistry::get()
        .list_all()
        .into_iter()
        .filter(|config| config.selector == 2)
        .count();
    assert_eq!(matches, 1);

    let english = LocalizedStringTable::builtin(Language::ENGLISH);
    let turkish = LocalizedStringTable::builtin(selected);
    assert_ne!(english.lookup(StringKey::Delete), turkish.lookup(StringKey::Delete));
}

#[test]
fn test_unknown_selector_is_not_silently_english() {
    assert_eq!(
        Language::from_selector(3).unwrap_err(),
        StringTableError::UnknownSelector(3)
    );
}

// ==================== Encoding Tests ====================

#[test]
fn test_turkish_strings_round_trip_through_cp857() {
    let table = LocalizedStringTable::builtin(Language::TURKISH);
    for (key, text) in table.iter() {
        let bytes = CodePage::Cp857.encode(text).unwrap();
        assert_eq!(bytes.len(), text.chars().count(), "{} is single-byte", key);
        assert_eq!(CodePage::Cp857.decode(&bytes).unwrap(), text);
    }
}

#[test]
fn test_legacy_bytes_decode_to_expected_text() {
    // Bytes of "Gizli Dosyaları Göster" in the DOS Turkish code page
    let bytes = b"Gizli Dosyalar\x8D G\x94ster";
    assert_eq!(
        CodePage::Cp857.decode(bytes).unwrap(),
        "Gizli Dosyaları Göster"
    );
}

// ==================== Header File Tests ====================

#[test]
fn test_header_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = write_turkish_header(&dir);

    let loaded = load_header_file(&path, Language::TURKISH, None)
        .unwrap()
        .expect("Gate matches the active language");
    assert_eq!(loaded, LocalizedStringTable::builtin(Language::TURKISH));
}

#[test]
fn test_header_file_gated_on_other_language() {
    let dir = TempDir::new().unwrap();
    let path = write_turkish_header(&dir);

    let loaded = load_header_file(&path, Language::ENGLISH, None).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_header_missing_a_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_turkish_header(&dir);

    let bytes = std::fs::read(&path).unwrap();
    let text = CodePage::Cp857.decode(&bytes).unwrap();
    let trimmed: String = text
        .lines()
        .filter(|line| !line.contains("STRING_VIEW"))
        .map(|line| format!("{}\n", line))
        .collect();

    let err = LegacyHeader::parse(&trimmed)
        .unwrap()
        .into_table(Language::TURKISH)
        .unwrap_err();
    assert_eq!(
        err,
        StringTableError::MissingTranslationKey {
            language: "tr",
            key: "STRING_VIEW",
        }
    );
}

// ==================== Config Tests ====================

#[test]
fn test_config_loads_header_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_turkish_header(&dir);
    let path_str = path.to_str().unwrap().to_string();

    let config = Config::from_lookup(|name| match name {
        "FDOSTUI_LANGUAGE" => Some("tr".to_string()),
        "FDOSTUI_STRINGS_FILE" => Some(path_str.clone()),
        _ => None,
    })
    .unwrap();

    let table = config.string_table().unwrap();
    assert_eq!(table.lookup(StringKey::RebootComputer), "Yeniden Başlat");
}

// ==================== Export / Validation Tests ====================

#[test]
fn test_json_export_is_utf8() {
    let table = LocalizedStringTable::builtin(Language::TURKISH);
    let json = to_json(&table).unwrap();
    assert!(json.contains("\"exit\": \"Çıkış\""));
}

#[test]
fn test_builtin_tables_validate_cleanly() {
    for language in [Language::ENGLISH, Language::TURKISH] {
        let report = TranslationValidator::validate(&LocalizedStringTable::builtin(language));
        assert!(report.is_clean(), "{}: {:?}", language, report);
    }
}

// ==================== Shipped Resource Tests ====================

#[test]
fn test_shipped_turkish_header_matches_builtin_table() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("lang/tr.h");

    let loaded = load_header_file(&path, Language::TURKISH, None)
        .unwrap()
        .expect("lang/tr.h is gated on TR");
    assert_eq!(loaded, LocalizedStringTable::builtin(Language::TURKISH));
}

#[test]
fn test_shipped_turkish_header_is_cp857() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("lang/tr.h");
    let bytes = std::fs::read(path).unwrap();

    assert!(std::str::from_utf8(&bytes).is_err());
    let header = LegacyHeader::decode(&bytes, CodePage::Cp857).unwrap();
    assert_eq!(header.selector_name, "TR");
    assert_eq!(header.selector, 2);
}
