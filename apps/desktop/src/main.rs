use folio::domain::config::FolioConfig;
use folio::features;
use folio::kernel::config::load_or_default;
use folio_desktop::DesktopApp;

fn main() -> anyhow::Result<()> {
    let config = load_or_default::<FolioConfig>(std::env::args_os().nth(1));
    let _logger = folio_logger::init_from_config("folio-desktop", &config.logging)?;

    tracing::info!(features = ?features::ENABLED, "Starting folio desktop");
    DesktopApp::new(config).launch(folio_ui::App);
    Ok(())
}
