use std::{fs, sync::Mutex};

use quire_config::{ConfigLoadError, ManifestConfig, ManifestConfigSource};
use quire_model::ImageType;
use tempfile::tempdir;

static SERIAL: Mutex<()> = Mutex::new(());

fn serial_guard() -> std::sync::MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

fn clear_overrides() {
    for key in ["QUIRE_CONFIG_PATH", "QUIRE_CONFIG_JSON"] {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn loads_toml_file_by_extension() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("quire.toml");
    fs::write(
        &path,
        r#"
api_root = ["komga", "api", "v1"]
thumbnail_type = "png"
utc_offset_minutes = 60
convertible_media_types = ["image/webp"]
"#,
    )
    .expect("write config");

    let config = ManifestConfig::load_from_file(&path).expect("load config");
    assert_eq!(config.api_root, ["komga", "api", "v1"]);
    assert_eq!(config.opds_root, ["opds", "v2"]);
    assert_eq!(config.thumbnail_type, ImageType::Png);
    assert_eq!(config.utc_offset_minutes, Some(60));
    assert_eq!(config.convertible_media_types, ["image/webp"]);
}

#[test]
fn sniffs_format_without_extension() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("quire.conf");
    fs::write(&path, r#"{"thumbnail_type": "webp"}"#).expect("write config");

    let config = ManifestConfig::load_from_file(&path).expect("load config");
    assert_eq!(config.thumbnail_type, ImageType::Webp);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let err = ManifestConfig::load_from_file(&dir.path().join("absent.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Io { .. }));
}

#[test]
fn invalid_json_file_is_a_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("quire.json");
    fs::write(&path, r#"{"thumbnail_type": "tiff"}"#).expect("write config");

    let err = ManifestConfig::load_from_file(&path).unwrap_err();
    match err {
        ConfigLoadError::Parse { origin, .. } => {
            assert!(origin.ends_with("quire.json"))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn env_path_takes_precedence_over_inline_json() {
    let _guard = serial_guard();
    clear_overrides();

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("quire.toml");
    fs::write(&path, "thumbnail_type = \"png\"").expect("write config");

    unsafe {
        std::env::set_var("QUIRE_CONFIG_PATH", &path);
        std::env::set_var("QUIRE_CONFIG_JSON", r#"{"thumbnail_type": "webp"}"#);
    }
    let (config, source) = ManifestConfig::load_from_env().expect("load");
    clear_overrides();

    assert_eq!(config.thumbnail_type, ImageType::Png);
    assert_eq!(source, ManifestConfigSource::EnvPath(path));
}

#[test]
fn inline_json_from_env() {
    let _guard = serial_guard();
    clear_overrides();

    unsafe {
        std::env::set_var("QUIRE_CONFIG_JSON", r#"{"utc_offset_minutes": -120}"#)
    };
    let (config, source) = ManifestConfig::load_from_env().expect("load");
    clear_overrides();

    assert_eq!(config.utc_offset_minutes, Some(-120));
    assert_eq!(source, ManifestConfigSource::EnvInline);
}
