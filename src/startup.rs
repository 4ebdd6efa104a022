use dioxus_logger::tracing;

use crate::{config::Config, data::panel_config::PanelConfigStore, error::AppError};

/// Loads the panel config store from the configured file.
///
/// A missing file starts the bot with no configured channels; a corrupt file aborts
/// startup so administrator choices are never silently discarded.
///
/// # Arguments
/// - `config` - Application configuration containing the file path
///
/// # Returns
/// - `Ok(PanelConfigStore)` - Loaded store
/// - `Err(AppError::StoreErr)` - File unreadable or corrupt
pub async fn load_panel_config(config: &Config) -> Result<PanelConfigStore, AppError> {
    let store = PanelConfigStore::load(&config.panel_config_path).await?;

    tracing::info!(
        "Loaded {} configured panel channel(s) from {}",
        store.len().await,
        store.path().display()
    );

    Ok(store)
}
