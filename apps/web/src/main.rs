//! Browser shell. Config files and env overrides are native-only, so the page
//! runs on the defaults that `App` provides when no config context exists.

fn main() {
    tracing::info!("Starting folio web");
    dioxus::launch(folio_ui::App);
}
