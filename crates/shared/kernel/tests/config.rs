use folio_kernel::config::{ConfigError, load_config, load_or_default};
use folio_kernel::domain::config::FolioConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_partial_toml_over_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("folio.toml");
    fs::write(
        &path,
        r#"
[window]
title = "Review build"

[motion]
hold_ms = 1200

[contact]
submit_delay_ms = 10
"#,
    )?;

    let cfg: FolioConfig = load_config(Some(&path))?;
    assert_eq!(cfg.window.title, "Review build");
    assert_eq!(cfg.window.width, 1280);
    assert_eq!(cfg.motion.hold_ms, 1200);
    assert_eq!(cfg.motion.type_interval_ms, 100);
    assert_eq!(cfg.contact.submit_delay_ms, 10);
    assert_eq!(cfg.contact.status_reset_ms, 5000);
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let err = load_config::<FolioConfig>(Some(dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn mistyped_value_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("folio.toml");
    fs::write(&path, "[motion]\nhold_ms = \"forever\"\n")?;

    let err = load_config::<FolioConfig>(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}

#[test]
fn load_or_default_falls_back() {
    let dir = tempdir().expect("temp dir");
    let cfg: FolioConfig = load_or_default(Some(dir.path().join("absent.toml")));
    assert_eq!(cfg, FolioConfig::default());
}
