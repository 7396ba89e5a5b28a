use color_eyre::eyre::Result;
use elden_scout::{
    api::ApiClient,
    app::App,
    logging,
    settings::{Settings, get_data_dir, settings_path},
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (settings, load_error) = Settings::load();
    logging::init(get_data_dir(), settings.debug_mode)?;
    log::info!("Elden Scout start: {}", chrono::Local::now());
    if let Some(e) = load_error {
        log::info!("Using default settings ({}): {e}", settings_path().display());
    }

    let client = ApiClient::new(&settings.api_base_url)?;
    log::info!("Using backend at {}", client.base_url());

    let health_client = client.clone();
    tokio::spawn(async move {
        match health_client.health().await {
            Ok(health) => log::info!("Backend health: {health:?}"),
            Err(e) => log::warn!("Backend health check failed: {e}"),
        }
    });

    let mut app = App::new(settings, Arc::new(client));
    app.run().await?;
    Ok(())
}
