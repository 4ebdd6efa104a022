use super::*;

/// Tests loading when no config file exists yet.
///
/// Verifies that a missing file is not an error and yields an empty store.
///
/// Expected: Ok(store) with no entries
#[tokio::test]
async fn returns_empty_store_when_file_is_absent() -> Result<(), PanelConfigError> {
    let test = TestBuilder::new().build().unwrap();

    let store = PanelConfigStore::load(test.panel_config_path()).await?;

    assert_eq!(store.len().await, 0);
    assert!(store.channel_for(GuildId::new(1)).await.is_none());
    assert!(!test.panel_config_path().exists());

    Ok(())
}

/// Tests loading an existing mapping.
///
/// Verifies that guild ID keys and channel ID values are read back as typed IDs.
///
/// Expected: Ok(store) with both entries
#[tokio::test]
async fn loads_existing_mapping() -> Result<(), PanelConfigError> {
    let test = TestBuilder::new()
        .with_panel_config(
            r#"{
    "111111111111111111": 222222222222222222,
    "333333333333333333": 444444444444444444
}"#,
        )
        .build()
        .unwrap();

    let store = PanelConfigStore::load(test.panel_config_path()).await?;

    assert_eq!(store.len().await, 2);
    assert_eq!(
        store.channel_for(GuildId::new(111111111111111111)).await,
        Some(ChannelId::new(222222222222222222))
    );
    assert_eq!(
        store.channel_for(GuildId::new(333333333333333333)).await,
        Some(ChannelId::new(444444444444444444))
    );

    Ok(())
}

/// Tests loading an empty JSON object.
///
/// Expected: Ok(store) with no entries
#[tokio::test]
async fn loads_empty_object() -> Result<(), PanelConfigError> {
    let test = TestBuilder::new().with_panel_config("{}").build().unwrap();

    let store = PanelConfigStore::load(test.panel_config_path()).await?;

    assert_eq!(store.len().await, 0);

    Ok(())
}

/// Tests loading a corrupt file.
///
/// Verifies that a parse failure is propagated instead of silently starting empty.
///
/// Expected: Err(PanelConfigError::Json)
#[tokio::test]
async fn fails_on_corrupt_file() {
    let test = TestBuilder::new()
        .with_panel_config("{ not json")
        .build()
        .unwrap();

    let result = PanelConfigStore::load(test.panel_config_path()).await;

    assert!(matches!(result, Err(PanelConfigError::Json(_))));
}

/// Tests loading a file whose values are not channel IDs.
///
/// Expected: Err(PanelConfigError::Json)
#[tokio::test]
async fn fails_on_non_numeric_channel() {
    let test = TestBuilder::new()
        .with_panel_config(r#"{ "111111111111111111": "general" }"#)
        .build()
        .unwrap();

    let result = PanelConfigStore::load(test.panel_config_path()).await;

    assert!(matches!(result, Err(PanelConfigError::Json(_))));
}

/// Tests loading a file with a key that is not a guild ID.
///
/// Expected: Err(PanelConfigError::InvalidGuildId)
#[tokio::test]
async fn fails_on_invalid_guild_key() {
    let test = TestBuilder::new()
        .with_panel_config(r#"{ "my-guild": 222222222222222222 }"#)
        .build()
        .unwrap();

    let result = PanelConfigStore::load(test.panel_config_path()).await;

    match result {
        Err(PanelConfigError::InvalidGuildId { value, .. }) => assert_eq!(value, "my-guild"),
        other => panic!("expected InvalidGuildId, got {:?}", other.map(|_| ())),
    }
}
