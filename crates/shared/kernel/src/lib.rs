//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading for native shells and a timer
//! that works on both the desktop (tokio) and the browser (`gloo-timers`).
//!
//! ## Timers
//! ```rust,ignore
//! use folio_kernel::time::sleep;
//! use std::time::Duration;
//!
//! sleep(Duration::from_millis(100)).await;
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use folio_kernel::config::load_or_default;
//! use folio_kernel::domain::config::FolioConfig;
//!
//! let cfg: FolioConfig = load_or_default(Some("folio"));
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod time;

pub use folio_domain as domain;
