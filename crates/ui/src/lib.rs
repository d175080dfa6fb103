//! # Folio UI
//!
//! The page as a tree of Dioxus components. Shells (desktop, web) only
//! launch [`App`]; everything visible lives here.
//!
//! Sections that animate own their state through the hooks in [`hooks`];
//! the pieces that only lay out data are plain components taking props, so
//! they can be rendered server-side in tests.

pub mod actions;
pub mod hooks;
mod scripts;
pub mod sections;
pub mod widgets;

use dioxus::prelude::*;
use folio::domain::config::FolioConfig;
use sections::{About, Contact, Experience, Footer, Hero, Navigation, Projects, Skills};

/// Stylesheet injected into the document head.
pub const FOLIO_CSS: &str = include_str!("../assets/folio.css");

/// Root component.
///
/// Uses the [`FolioConfig`] provided by the shell, or the defaults when launched bare.
#[component]
pub fn App() -> Element {
    use_hook(|| {
        try_consume_context::<FolioConfig>().unwrap_or_else(|| {
            tracing::debug!("No config in context, using defaults");
            provide_context(FolioConfig::default())
        })
    });

    rsx! {
        style { {FOLIO_CSS} }
        div { class: "page",
            div { class: "bg-particles" }
            Navigation {}
            main {
                Hero {}
                About {}
                Skills {}
                Projects {}
                Experience {}
                Contact {}
            }
            Footer {}
        }
    }
}
