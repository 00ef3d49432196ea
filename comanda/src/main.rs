//! Comanda desktop client entry point.
//!
//! Loads `.env`, starts logging, reads [`ClientConfig`], enters a tokio
//! runtime for the background requests and hands the window to eframe.

use comanda::config::ClientConfig;
use comanda::ui::desktop::DesktopApp;
use comanda::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    comanda::debug::init();

    let config = ClientConfig::from_env()?;
    tracing::info!(
        graphql_url = %config.graphql_url,
        rest_base = %config.rest_base(),
        data_dir = %config.data_dir.display(),
        "Starting Comanda"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let app = App::new(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Comanda"),
        ..Default::default()
    };

    eframe::run_native(
        "Comanda",
        options,
        Box::new(|cc| Ok(Box::new(DesktopApp::new(cc, app)))),
    )?;

    tracing::info!("Comanda closed");
    Ok(())
}
