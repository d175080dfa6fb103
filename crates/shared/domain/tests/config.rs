use folio_domain::config::{ContactConfig, FolioConfig, LoggingConfig, MotionConfig, WindowConfig};
use serde_json::json;
use std::time::Duration;

#[test]
fn config_defaults_are_sane() {
    let motion = MotionConfig::default();
    assert_eq!(motion.type_interval(), Duration::from_millis(100));
    assert_eq!(motion.hold(), Duration::from_secs(2));
    assert_eq!(motion.cursor_blink(), Duration::from_millis(500));
    assert_eq!(motion.counter_steps, 50);

    let contact = ContactConfig::default();
    assert_eq!(contact.submit_delay(), Duration::from_secs(2));
    assert_eq!(contact.status_reset(), Duration::from_secs(5));

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.path.is_none());

    let window = WindowConfig::default();
    assert_eq!((window.width, window.height), (1280, 860));
}

#[test]
fn folio_config_deserializes_partial_sections() {
    let raw = json!({
        "window": { "title": "Preview" },
        "motion": { "hold_ms": 500 },
        "logging": { "level": "debug", "path": "/tmp/folio-logs" }
    });

    let cfg: FolioConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.window.title, "Preview");
    assert_eq!(cfg.window.width, 1280);
    assert_eq!(cfg.motion.hold_ms, 500);
    assert_eq!(cfg.motion.type_interval_ms, 100);
    assert_eq!(cfg.contact, ContactConfig::default());
    assert_eq!(cfg.logging.path, Some(std::path::PathBuf::from("/tmp/folio-logs")));
}

#[test]
fn clones_share_until_mutated() {
    let base = FolioConfig::default();
    let mut tweaked = base.clone();
    tweaked.contact.submit_delay_ms = 10;

    assert_eq!(base.contact.submit_delay_ms, 2000);
    assert_eq!(tweaked.contact.submit_delay(), Duration::from_millis(10));
    assert_ne!(base, tweaked);
}
