use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FolioConfigInner {
    pub window: WindowConfig,
    pub motion: MotionConfig,
    pub contact: ContactConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FolioConfig {
    #[serde(flatten, default)]
    inner: Arc<FolioConfigInner>,
}

impl Deref for FolioConfig {
    type Target = FolioConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for FolioConfig {
    fn deref_mut(&mut self) -> &mut FolioConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Desktop window settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

/// Animation timings, all in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub type_interval_ms: u64,
    pub hold_ms: u64,
    pub cursor_blink_ms: u64,
    pub counter_steps: u32,
    pub counter_interval_ms: u64,
    pub counter_stagger_ms: u64,
}

/// Contact form timings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u64,
    pub status_reset_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub path: Option<PathBuf>,
    pub json: bool,
    /// Extra `EnvFilter` directives (e.g. `folio_ui=debug`).
    pub filter: Option<String>,
}

impl MotionConfig {
    #[must_use]
    pub const fn type_interval(&self) -> Duration {
        Duration::from_millis(self.type_interval_ms)
    }

    #[must_use]
    pub const fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    #[must_use]
    pub const fn cursor_blink(&self) -> Duration {
        Duration::from_millis(self.cursor_blink_ms)
    }

    #[must_use]
    pub const fn counter_interval(&self) -> Duration {
        Duration::from_millis(self.counter_interval_ms)
    }

    #[must_use]
    pub const fn counter_stagger(&self) -> Duration {
        Duration::from_millis(self.counter_stagger_ms)
    }
}

impl ContactConfig {
    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    #[must_use]
    pub const fn status_reset(&self) -> Duration {
        Duration::from_millis(self.status_reset_ms)
    }
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Najimudeen Sanan | Portfolio".to_owned(), width: 1280, height: 860 }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            type_interval_ms: 100,
            hold_ms: 2000,
            cursor_blink_ms: 500,
            counter_steps: 50,
            counter_interval_ms: 50,
            counter_stagger_ms: 200,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { submit_delay_ms: 2000, status_reset_ms: 5000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), path: None, json: false, filter: None }
    }
}
