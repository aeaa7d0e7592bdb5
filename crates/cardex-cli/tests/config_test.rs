use cardex_cli::config::{load_or_default, load_settings, save_settings, Settings, DEFAULT_BASE_URL};
use cardex_core::options::DEFAULT_PAGE_SIZE;
use tempfile::tempdir;

#[test]
fn settings_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut settings = Settings::default();
    settings.flags.nsfw = true;
    settings.find_count = 10;
    settings.api_key = "sekrit".to_owned();
    save_settings(&settings, &path).unwrap();

    let loaded = load_settings(&path).unwrap();
    assert!(loaded.flags.nsfw);
    assert_eq!(loaded.find_count, 10);
    assert_eq!(loaded.api_key, "sekrit");
    assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
}

#[test]
fn partial_file_merges_over_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "nsfw = true\n").unwrap();

    let loaded = load_settings(&path).unwrap();
    assert!(loaded.flags.nsfw);
    assert!(!loaded.flags.nsfl);
    assert_eq!(loaded.find_count, DEFAULT_PAGE_SIZE);
    assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let settings = load_or_default(&dir.path().join("nope.toml"));
    assert_eq!(settings.find_count, DEFAULT_PAGE_SIZE);
    assert!(!settings.flags.require_images);
}

#[test]
fn set_key_updates_flags_and_scalars() {
    let mut settings = Settings::default();
    settings.set_key("require_lore", "true").unwrap();
    assert!(settings.flags.require_lore);

    settings.set_key("find_count", "25").unwrap();
    assert_eq!(settings.find_count, 25);

    settings.set_key("base_url", "https://catalog.example").unwrap();
    assert_eq!(settings.base_url, "https://catalog.example");
}

#[test]
fn set_key_rejects_bad_input() {
    let mut settings = Settings::default();
    assert!(settings.set_key("no_such_setting", "true").is_err());
    assert!(settings.set_key("nsfw", "maybe").is_err());
    assert!(settings.set_key("find_count", "0").is_err());
    assert!(settings.set_key("find_count", "lots").is_err());
}
