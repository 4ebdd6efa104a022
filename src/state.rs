//! Bot state shared across all event handlers.
//!
//! This module defines the `BotState` struct which holds every shared resource the
//! handlers need. The state is initialized once during startup, handed to the Serenity
//! event handler, and cloned into tasks where needed.
//!
//! All fields use cheap-to-clone types:
//! - `Arc<PanelConfigStore>` is a reference-counted store handle
//! - `PanelInstaller` holds an `Arc` to the same store plus small settings
//! - `AutoDeleteScheduler` shares its pending table through an `Arc`

use std::sync::Arc;

use crate::{
    config::Config,
    data::panel_config::PanelConfigStore,
    model::{nickname::NicknamePrefix, panel::PanelSettings},
    service::{auto_delete::AutoDeleteScheduler, panel::PanelInstaller},
};

#[derive(Clone)]
pub struct BotState {
    /// Per-guild panel channel chosen by administrators.
    pub store: Arc<PanelConfigStore>,

    /// Posts the panel where it is missing.
    pub installer: PanelInstaller,

    /// Prefix toggled by the panel buttons.
    pub prefix: NicknamePrefix,

    /// Panel look and lookup settings.
    pub settings: PanelSettings,

    /// Removes ephemeral replies and notices after `settings.auto_delete_delay`.
    pub auto_delete: AutoDeleteScheduler,
}

impl BotState {
    pub fn new(config: &Config, store: PanelConfigStore) -> Self {
        let store = Arc::new(store);
        let settings = PanelSettings::from_config(config);
        let prefix = NicknamePrefix::new(config.nickname_prefix.clone());

        Self {
            installer: PanelInstaller::new(Arc::clone(&store), settings.clone(), prefix.clone()),
            store,
            prefix,
            settings,
            auto_delete: AutoDeleteScheduler::new(),
        }
    }
}
