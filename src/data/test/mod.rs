mod panel_config;
