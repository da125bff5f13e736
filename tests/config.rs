use genedrift::config::{AppConfig, ConfigManager, ConfigSection, DisplayConfig, MixingConfig};
use genedrift::GeneDriftError;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("genedrift-{}-{}.toml", name, std::process::id()))
}

#[test]
fn test_defaults_validate() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.population.population_size(), 36);
    assert_eq!(config.display.grid_offset, 6.25);
    assert_eq!(AppConfig::describe().len(), 3);
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let path = temp_path("partial");
    std::fs::write(&path, "[mixing]\ncrossover_rate = 0.25\nseed = 42\n").unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    let config = manager.get().unwrap();

    assert_eq!(config.mixing.crossover_rate, 0.25);
    assert_eq!(config.mixing.mutation_rate, 0.001);
    assert_eq!(config.mixing.seed, Some(42));
    assert_eq!(config.population.grid_size, 6);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_invalid_file_rejected_and_previous_kept() {
    let path = temp_path("invalid");
    std::fs::write(&path, "[mixing]\nmutation_rate = 2.0\n").unwrap();

    let manager = ConfigManager::new();
    let result = manager.load_from_file(&path);

    assert!(matches!(result, Err(GeneDriftError::Configuration(_))));
    assert_eq!(manager.get().unwrap(), AppConfig::default());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_save_then_load() {
    let path = temp_path("saved");
    let manager = ConfigManager::new();
    manager
        .update(|config| {
            config.population.grid_size = 4;
            config.display.redraw_every = 5;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_from_file(&path).unwrap();
    assert_eq!(reloaded.get().unwrap(), manager.get().unwrap());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_update_rejects_invalid_change() {
    let manager = ConfigManager::new();
    let result = manager.update(|config| config.population.grid_size = 0);

    assert!(result.is_err());
    assert_eq!(manager.get().unwrap().population.grid_size, 6);
}

#[test]
fn test_layered_file_then_environment() {
    let manager = ConfigManager::new();
    manager.load_layered(Some(temp_path("missing").as_path())).unwrap();
    assert_eq!(manager.get().unwrap(), AppConfig::default());

    let path = temp_path("layered");
    std::fs::write(&path, "[population]\ngrid_size = 3\n\n[display]\nframes = 10\n").unwrap();
    std::env::set_var("GENEDRIFT__DISPLAY__FRAMES", "25");

    let result = manager.load_layered(Some(path.as_path()));
    std::env::remove_var("GENEDRIFT__DISPLAY__FRAMES");
    std::fs::remove_file(&path).ok();

    result.unwrap();
    let config = manager.get().unwrap();
    assert_eq!(config.population.grid_size, 3);
    assert_eq!(config.display.frames, 25);
}

#[test]
fn test_missing_file_is_an_error_for_direct_load() {
    let manager = ConfigManager::new();
    let result = manager.load_from_file(temp_path("absent"));

    assert!(matches!(result, Err(GeneDriftError::Config(_))));
    assert_eq!(manager.get().unwrap(), AppConfig::default());
}

#[test]
fn test_direct_load_ignores_environment() {
    let path = temp_path("direct");
    std::fs::write(&path, "[population]\ngrid_size = 2\n").unwrap();
    std::env::set_var("GENEDRIFT__POPULATION__GRID_SIZE", "5");

    let manager = ConfigManager::new();
    let result = manager.load_from_file(&path);
    std::env::remove_var("GENEDRIFT__POPULATION__GRID_SIZE");
    std::fs::remove_file(&path).ok();

    result.unwrap();
    assert_eq!(manager.get().unwrap().population.grid_size, 2);
}

#[test]
fn test_malformed_toml_reports_source_error() {
    let path = temp_path("malformed");
    std::fs::write(&path, "[mixing\ncrossover_rate = ").unwrap();

    let manager = ConfigManager::new();
    let result = manager.load_from_file(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(GeneDriftError::Config(_))));
}

#[test]
fn test_describe_lists_fields_with_live_defaults() {
    let doc = MixingConfig::describe();
    let keys: Vec<&str> = doc.fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(
        keys,
        ["mixing.crossover_rate", "mixing.mutation_rate", "mixing.seed"]
    );
    assert_eq!(doc.fields[0].env, "GENEDRIFT__MIXING__CROSSOVER_RATE");
    assert_eq!(doc.fields[0].default, serde_json::json!(0.005));
    assert_eq!(doc.fields[2].default, serde_json::Value::Null);

    let display = DisplayConfig::describe();
    let offset = display
        .fields
        .iter()
        .find(|f| f.key == "display.grid_offset")
        .unwrap();
    assert_eq!(offset.default, serde_json::json!(DisplayConfig::default().grid_offset));
}
