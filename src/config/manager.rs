use super::{
    display::DisplayConfig,
    mixing::MixingConfig,
    population::PopulationConfig,
    traits::{ConfigSection, SectionDoc},
};
use crate::error::GeneDriftError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Prefix for environment overrides, e.g. `GENEDRIFT__MIXING__CROSSOVER_RATE=0.05`
pub const ENV_PREFIX: &str = "GENEDRIFT";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mixing: MixingConfig,
    pub population: PopulationConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), GeneDriftError> {
        self.mixing.validate()?;
        self.population.validate()?;
        self.display.validate()?;
        Ok(())
    }

    pub fn describe() -> Vec<SectionDoc> {
        vec![
            MixingConfig::describe(),
            PopulationConfig::describe(),
            DisplayConfig::describe(),
        ]
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load defaults, then the TOML file at `path` if given, then `GENEDRIFT__*`
    /// environment variables. A missing file is not an error.
    pub fn load_layered(&self, path: Option<&Path>) -> Result<(), GeneDriftError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            if path.exists() {
                builder = builder.add_source(::config::File::from(path));
            } else {
                log::warn!("Config file {} not found, using defaults", path.display());
            }
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        self.install(builder)
    }

    /// Load exactly the file at `path` over the defaults, ignoring the environment.
    /// The file must exist.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GeneDriftError> {
        let builder = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()).required(true));

        self.install(builder)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GeneDriftError> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, GeneDriftError> {
        let config = self.read()?;
        toml::to_string_pretty(&*config)
            .map_err(|e| GeneDriftError::Configuration(format!("Failed to serialize: {}", e)))
    }

    pub fn get(&self) -> Result<AppConfig, GeneDriftError> {
        Ok(self.read()?.clone())
    }

    /// Apply `f` to a copy and keep it only if the result validates
    pub fn update<F>(&self, f: F) -> Result<(), GeneDriftError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get()?;
        f(&mut candidate);
        candidate.validate()?;
        *self.write()? = candidate;
        Ok(())
    }

    /// Build, deserialize and validate; the current config is kept on any failure
    fn install(
        &self,
        builder: ::config::ConfigBuilder<::config::builder::DefaultState>,
    ) -> Result<(), GeneDriftError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        *self.write()? = config;
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, AppConfig>, GeneDriftError> {
        self.config
            .read()
            .map_err(|_| GeneDriftError::Configuration("Config lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, AppConfig>, GeneDriftError> {
        self.config
            .write()
            .map_err(|_| GeneDriftError::Configuration("Config lock poisoned".to_string()))
    }
}
