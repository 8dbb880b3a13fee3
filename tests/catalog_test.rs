//! Tests for loading the things/aliases catalog.

use launchq::config::{Catalog, Config, DEFAULT_CATALOG};
use launchq::error::Error;
use std::path::PathBuf;

const SAMPLE: &str = r#"
[open.things]
github = "https://github.com"
notes = "/home/me/notes.md"
complex = "https://y"

[open.aliases]
gh = "github"
multi = "complex"
broken = "nowhere"
"#;

fn temp_catalog(content: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("launchq-test")
        .join(uuid::Uuid::new_v4().to_string());
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("config.toml");
    std::fs::write(&path, content).expect("write catalog");
    path
}

#[test]
fn parses_things_and_aliases() {
    let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
    assert_eq!(catalog.things().len(), 3);
    assert_eq!(catalog.aliases().len(), 3);
    assert_eq!(catalog.aliases()["gh"], "github");
    assert_eq!(catalog.resolve("gh").unwrap(), "https://github.com");
}

#[test]
fn missing_sections_are_empty() {
    let catalog = Catalog::from_toml_str("").unwrap();
    assert!(catalog.things().is_empty());
    assert!(catalog.aliases().is_empty());

    let catalog = Catalog::from_toml_str("[open.things]\nx = \"https://x\"\n").unwrap();
    assert_eq!(catalog.things().len(), 1);
    assert!(catalog.aliases().is_empty());

    let catalog = Catalog::from_toml_str("[open.aliases]\nx = \"y\"\n").unwrap();
    assert!(catalog.things().is_empty());
    assert_eq!(catalog.aliases().len(), 1);
}

#[test]
fn unrelated_sections_are_ignored() {
    let catalog = Catalog::from_toml_str("[editor]\nprogram = \"nvim\"\n").unwrap();
    assert!(catalog.things().is_empty());
}

#[test]
fn non_string_value_is_config_error() {
    let err = Catalog::from_toml_str("[open.things]\nport = 8080\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {err:?}");
}

#[test]
fn malformed_toml_is_config_error() {
    let err = Catalog::from_toml_str("[open.things\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {err:?}");
}

fn listing(catalog: &Catalog) -> Vec<(&str, &str, bool)> {
    catalog
        .entries()
        .into_iter()
        .map(|e| (e.name, e.target, e.resolved))
        .collect()
}

#[test]
fn entries_are_sorted_and_keep_dangling_aliases() {
    let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
    assert_eq!(
        listing(&catalog),
        vec![
            ("broken", "nowhere", false),
            ("complex", "https://y", true),
            ("gh", "https://github.com", true),
            ("github", "https://github.com", true),
            ("multi", "https://y", true),
            ("notes", "/home/me/notes.md", true),
        ]
    );
}

#[test]
fn entries_list_shadowed_name_once() {
    let catalog =
        Catalog::from_toml_str("[open.things]\nx = \"a\"\ny = \"b\"\n[open.aliases]\nx = \"y\"\n")
            .unwrap();
    assert_eq!(listing(&catalog), vec![("x", "b", true), ("y", "b", true)]);
}

#[test]
fn alias_shadowing_a_thing_with_a_dangling_value_is_unresolved() {
    let catalog =
        Catalog::from_toml_str("[open.things]\nx = \"a\"\n[open.aliases]\nx = \"gone\"\n")
            .unwrap();
    assert_eq!(listing(&catalog), vec![("x", "gone", false)]);
}

// ---------------------------------------------------------------------------
// First-run seeding
// ---------------------------------------------------------------------------

#[test]
fn default_catalog_parses_and_resolves() {
    let catalog = Catalog::from_toml_str(DEFAULT_CATALOG).unwrap();
    assert!(!catalog.things().is_empty());
    assert!(catalog.entries().iter().all(|e| e.resolved));
    assert_eq!(catalog.resolve("d").unwrap(), "https://docs.rs");
}

#[test]
fn load_or_seed_creates_missing_directory_and_file() {
    let dir = std::env::temp_dir()
        .join("launchq-test")
        .join(uuid::Uuid::new_v4().to_string());
    let path = dir.join("nested").join("config.toml");
    assert!(!dir.exists());

    let catalog = Catalog::load_or_seed(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CATALOG);
    assert_eq!(catalog.resolve("docs").unwrap(), "https://docs.rs");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn load_or_seed_keeps_existing_file() {
    let path = temp_catalog(SAMPLE);

    let catalog = Catalog::load_or_seed(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), SAMPLE);
    assert!(catalog.resolve("docs").is_err());
    assert_eq!(catalog.resolve("gh").unwrap(), "https://github.com");
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn explicit_missing_path_is_not_seeded() {
    let path = std::env::temp_dir()
        .join("launchq-test")
        .join(uuid::Uuid::new_v4().to_string())
        .join("config.toml");
    let config = Config {
        catalog_path: path.clone(),
        seed_catalog: false,
        max_workers: 1,
        launcher: None,
        log_level: "info".to_string(),
    };

    let err = config.load_catalog().unwrap_err();

    assert!(matches!(err, Error::Config(_)), "got {err:?}");
    assert!(!path.exists());
}

#[test]
fn default_path_is_seeded() {
    let dir = std::env::temp_dir()
        .join("launchq-test")
        .join(uuid::Uuid::new_v4().to_string());
    let config = Config {
        catalog_path: dir.join("config.toml"),
        seed_catalog: true,
        max_workers: 1,
        launcher: None,
        log_level: "info".to_string(),
    };

    let catalog = config.load_catalog().unwrap();

    assert!(config.catalog_path.exists());
    assert_eq!(catalog.resolve("d").unwrap(), "https://docs.rs");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn load_reads_file_from_disk() {
    let path = temp_catalog(SAMPLE);
    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.resolve("multi").unwrap(), "https://y");
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn load_missing_file_names_the_path() {
    let path = std::env::temp_dir()
        .join("launchq-test")
        .join(uuid::Uuid::new_v4().to_string())
        .join("config.toml");
    let err = Catalog::load(&path).unwrap_err();
    match err {
        Error::Config(msg) => assert!(msg.contains("config.toml"), "message: {msg}"),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn load_bad_file_names_the_path() {
    let path = temp_catalog("[open.things]\nx = 1\n");
    let err = Catalog::load(&path).unwrap_err();
    match err {
        Error::Config(msg) => assert!(msg.contains(&path.display().to_string()), "message: {msg}"),
        other => panic!("expected Config error, got {other:?}"),
    }
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
