use folio_domain::config::LoggingConfig;
use folio_logger::init_from_config;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn filter_adds_to_the_configured_level() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LoggingConfig {
        level: "debug".to_owned(),
        path: Some(log_dir.clone()),
        json: false,
        filter: Some("folio_ui=trace".to_owned()),
    };

    let logger = init_from_config("folio-filter", &config)?;
    tracing::info!(target: "folio_contact", "contact-line");
    tracing::trace!(target: "folio_ui", "ui-trace-line");
    tracing::trace!(target: "folio_contact", "contact-trace-line");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let contents = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| fs::read_to_string(entry.path()))
        .collect::<Result<String, _>>()?;

    assert!(contents.contains("contact-line"), "base level silenced other targets");
    assert!(contents.contains("ui-trace-line"));
    assert!(!contents.contains("contact-trace-line"));
    Ok(())
}
