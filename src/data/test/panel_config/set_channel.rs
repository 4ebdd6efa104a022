use super::*;

/// Tests setting a channel on an empty store.
///
/// Verifies that the mapping is visible immediately and written to disk with the guild
/// ID as a string key and the channel ID as an integer.
///
/// Expected: Ok(()) and file contains the entry
#[tokio::test]
async fn persists_new_mapping() -> Result<(), PanelConfigError> {
    let test = TestBuilder::new().build().unwrap();
    let store = PanelConfigStore::load(test.panel_config_path()).await?;

    let guild_id = GuildId::new(111111111111111111);
    let channel_id = ChannelId::new(222222222222222222);
    store.set_channel(guild_id, channel_id).await?;

    assert_eq!(store.channel_for(guild_id).await, Some(channel_id));
    assert_eq!(
        test.read_panel_config(),
        serde_json::json!({ "111111111111111111": 222222222222222222u64 })
    );

    Ok(())
}

/// Tests replacing the channel of an already configured guild.
///
/// Verifies that a guild never has more than one channel.
///
/// Expected: Ok(()) with only the newest channel stored
#[tokio::test]
async fn replaces_existing_mapping() -> Result<(), PanelConfigError> {
    let test = TestBuilder::new()
        .with_panel_config(r#"{ "111111111111111111": 222222222222222222 }"#)
        .build()
        .unwrap();
    let store = PanelConfigStore::load(test.panel_config_path()).await?;

    let guild_id = GuildId::new(111111111111111111);
    store
        .set_channel(guild_id, ChannelId::new(333333333333333333))
        .await?;

    assert_eq!(store.len().await, 1);
    assert_eq!(
        store.channel_for(guild_id).await,
        Some(ChannelId::new(333333333333333333))
    );
    assert_eq!(
        test.read_panel_config(),
        serde_json::json!({ "111111111111111111": 333333333333333333u64 })
    );

    Ok(())
}

/// Tests that other guilds are kept when one guild changes.
///
/// Verifies that the whole mapping is rewritten, not just the changed entry.
///
/// Expected: Ok(()) and both guilds present on disk
#[tokio::test]
async fn keeps_other_guilds() -> Result<(), PanelConfigError> {
    let test = TestBuilder::new()
        .with_panel_config(r#"{ "111111111111111111": 222222222222222222 }"#)
        .build()
        .unwrap();
    let store = PanelConfigStore::load(test.panel_config_path()).await?;

    store
        .set_channel(
            GuildId::new(333333333333333333),
            ChannelId::new(444444444444444444),
        )
        .await?;

    assert_eq!(
        test.read_panel_config(),
        serde_json::json!({
            "111111111111111111": 222222222222222222u64,
            "333333333333333333": 444444444444444444u64,
        })
    );

    Ok(())
}

/// Tests that a store reloaded from disk sees earlier changes.
///
/// Expected: Ok(()) with the mapping restored after reload
#[tokio::test]
async fn survives_reload() -> Result<(), PanelConfigError> {
    let test = TestBuilder::new().build().unwrap();
    let guild_id = GuildId::new(111111111111111111);
    let channel_id = ChannelId::new(222222222222222222);

    {
        let store = PanelConfigStore::load(test.panel_config_path()).await?;
        store.set_channel(guild_id, channel_id).await?;
    }

    let reloaded = PanelConfigStore::load(test.panel_config_path()).await?;
    assert_eq!(reloaded.channel_for(guild_id).await, Some(channel_id));

    Ok(())
}

/// Tests the on-disk formatting.
///
/// Verifies four-space indentation so the file stays hand-editable.
///
/// Expected: file text matches the pretty-printed form
#[tokio::test]
async fn writes_pretty_json() -> Result<(), PanelConfigError> {
    let test = TestBuilder::new().build().unwrap();
    let store = PanelConfigStore::load(test.panel_config_path()).await?;

    store
        .set_channel(GuildId::new(1), ChannelId::new(2))
        .await?;

    let raw = std::fs::read_to_string(test.panel_config_path())?;
    assert_eq!(raw, "{\n    \"1\": 2\n}");

    Ok(())
}

/// Tests a failed write.
///
/// Verifies that the error propagates and the in-memory mapping is left unchanged.
///
/// Expected: Err(PanelConfigError::Io) and no mapping for the guild
#[tokio::test]
async fn failed_write_leaves_store_unchanged() {
    let test = TestBuilder::new().build().unwrap();
    let missing_dir = test.dir().join("missing").join("panel_config.json");
    let store = PanelConfigStore::load(missing_dir).await.unwrap();

    let guild_id = GuildId::new(1);
    let result = store.set_channel(guild_id, ChannelId::new(2)).await;

    assert!(matches!(result, Err(PanelConfigError::Io(_))));
    assert!(store.channel_for(guild_id).await.is_none());
}
