use rentbook_config::{Config, ConfigManager};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_missing() {
    let temp = TempDir::new().expect("create temp dir");
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("manager");

    let config = manager.load().expect("load defaults");
    assert_eq!(config.branding, "SAINI TRADERS");
    assert_eq!(config.currency_symbol, "\u{20b9}");
    assert!(config.data_root.is_none());
}

#[test]
fn save_and_reload_round_trips() {
    let temp = TempDir::new().expect("create temp dir");
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("manager");

    let mut config = Config::default();
    config.branding = "GUPTA ESTATES".into();
    config.data_root = Some(temp.path().join("records"));
    manager.save(&config).expect("save config");

    let reloaded = manager.load().expect("reload");
    assert_eq!(reloaded.branding, "GUPTA ESTATES");
    assert_eq!(reloaded.resolve_data_root(), temp.path().join("records"));
}

#[test]
fn resolve_data_root_prefers_override() {
    let mut config = Config::default();
    assert!(config.resolve_data_root().ends_with("rentbook"));
    config.data_root = Some("/tmp/elsewhere".into());
    assert_eq!(
        config.resolve_data_root(),
        std::path::PathBuf::from("/tmp/elsewhere")
    );
}
