use evotune::config::{AppConfig, ConfigManager};

#[test]
fn default_config_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.search.generations, 10);
    assert_eq!(config.evaluation.n_folds, Some(5));
}

#[test]
fn invalid_sections_are_rejected() {
    let mut config = AppConfig::default();
    config.search.generations = 0;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.population.population_size = 5;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.population.elite_fraction = 0.6;
    config.population.mutant_fraction = 0.5;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.evaluation.n_folds = Some(1);
    assert!(config.validate().is_err());
}

#[test]
fn manager_round_trips_through_toml() {
    let path = std::env::temp_dir().join("evotune_config_roundtrip.toml");

    let manager = ConfigManager::new();
    let mut config = manager.get();
    config.search.generations = 25;
    config.search.seed = Some(7);
    config.population.population_size = 80;
    manager.update(config).unwrap();
    manager.save_to_file(&path).unwrap();

    let loaded = ConfigManager::new();
    loaded.load_from_file(&path).unwrap();
    let round_tripped = loaded.get();

    assert_eq!(round_tripped.search.generations, 25);
    assert_eq!(round_tripped.search.seed, Some(7));
    assert_eq!(round_tripped.population.population_size, 80);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn manager_rejects_invalid_updates() {
    let manager = ConfigManager::new();
    let mut config = manager.get();
    config.population.elite_inherit_prob = 1.5;
    assert!(manager.update(config).is_err());

    // The stored config is untouched after a rejected update
    assert!(manager.get().validate().is_ok());
}

#[test]
fn partial_files_fall_back_to_defaults() {
    let path = std::env::temp_dir().join("evotune_config_partial.toml");
    std::fs::write(&path, "[search]\ngenerations = 3\n").unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    let config = manager.get();

    assert_eq!(config.search.generations, 3);
    assert_eq!(config.population.population_size, 50);

    let _ = std::fs::remove_file(&path);
}
