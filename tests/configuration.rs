use mealdeck::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("mealdeck.toml");
    std::fs::write(
        &path,
        r#"
[database]
url = "sqlite:custom.db"
max_connections = 2

[nutrition]
timeout_secs = 3

[observability]
json = true
"#,
    )
    .unwrap();

    let config =
        Config::load(Some(path.to_str().unwrap().to_owned())).expect("Failed to load config");

    assert_eq!(config.database.max_connections, 2);
    assert_eq!(config.nutrition.timeout_secs, 3);
    assert_eq!(config.nutrition.base_url, mealdeck_nutrition::DEFAULT_BASE_URL);
    assert!(config.observability.json);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.child("missing.toml");

    let config =
        Config::load(Some(missing.to_str().unwrap().to_owned())).expect("Failed to load config");

    assert!(!config.database.url.is_empty());
    assert!(config.database.max_connections > 0);
    assert!(config.validate().is_ok());
}
