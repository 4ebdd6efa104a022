mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dioxus_logger::initialize_default();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let store = startup::load_panel_config(&config).await?;
    let state = BotState::new(&config, store);

    tracing::info!("Starting waitboard");

    bot::start::start_bot(&config, state).await
}
