use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use folio::domain::config::FolioConfig;

/// Native window shell around the portfolio page.
#[derive(Debug, Default)]
pub struct DesktopApp {
    config: FolioConfig,
}

impl DesktopApp {
    #[must_use]
    pub fn new(config: FolioConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.window.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.window.width = width;
        self.config.window.height = height;
        self
    }

    #[must_use]
    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// Opens the window and hands the config to the component tree as context.
    pub fn launch(self, root: fn() -> Element) {
        let window = &self.config.window;
        tracing::info!(title = %window.title, width = window.width, height = window.height, "Opening window");

        let builder = WindowBuilder::new().with_title(&window.title).with_inner_size(LogicalSize {
            width: f64::from(window.width),
            height: f64::from(window.height),
        });

        let cfg = Config::default().with_window(builder).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop().with_cfg(cfg).with_context(self.config).launch(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_touch_only_the_window() {
        let app = DesktopApp::new(FolioConfig::default()).with_title("Folio").with_size(800, 600);
        let config = app.config();
        assert_eq!(config.window.title, "Folio");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.motion, FolioConfig::default().motion);
    }
}
