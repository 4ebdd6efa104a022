use crate::{data::panel_config::PanelConfigStore, error::store::PanelConfigError};
use serenity::all::{ChannelId, GuildId};
use test_utils::builder::TestBuilder;

mod load;
mod set_channel;
