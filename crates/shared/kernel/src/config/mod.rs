use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Config file stem looked up when no path is given (`folio.toml`, `folio.json`, ...).
pub const DEFAULT_CONFIG_STEM: &str = "folio";
/// Environment prefix for overrides (`FOLIO__MOTION__HOLD_MS=1500`).
pub const ENV_PREFIX: &str = "FOLIO";

#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `FOLIO__*` environment variables.
///
/// Nested keys use double underscores: `FOLIO__CONTACT__SUBMIT_DELAY_MS` maps to
/// `contact.submit_delay_ms`. The file format is picked from the extension; a bare
/// stem such as `folio` matches any supported format.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, malformed, or does not
/// match the structure of `T`.
///
/// # Example
/// ```rust,ignore
/// use folio_kernel::config::load_config;
/// use folio_kernel::domain::config::FolioConfig;
///
/// let cfg: FolioConfig = load_config(Some("config/folio")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_STEM), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

/// Like [`load_config`], but falls back to `T::default()` with a warning.
///
/// A page with default timings is always preferable to a shell that refuses to start.
pub fn load_or_default<T>(path: Option<impl AsRef<Path>>) -> T
where
    T: DeserializeOwned + Default,
{
    load_config(path).unwrap_or_else(|e| {
        warn!(error = %e, "Using default configuration");
        T::default()
    })
}
