pub mod traits;
pub mod mixing;
pub mod population;
pub mod display;
pub mod manager;

pub use manager::{AppConfig, ConfigManager, ENV_PREFIX};
pub use mixing::MixingConfig;
pub use population::PopulationConfig;
pub use display::DisplayConfig;
pub use traits::{ConfigSection, FieldDoc, FieldHelp, SectionDoc};
