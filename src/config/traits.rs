use super::manager::ENV_PREFIX;
use crate::error::GeneDriftError;
use serde::{Deserialize, Serialize};

/// Static help for one field of a section
pub struct FieldHelp {
    pub name: &'static str,
    pub range: Option<(f64, f64)>,
    pub help: &'static str,
}

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), GeneDriftError>;
    fn field_help() -> &'static [FieldHelp];

    /// Field listing for `--describe-config`. Defaults come from serializing
    /// `Self::default()`, so they cannot drift from the code.
    fn describe() -> SectionDoc {
        let section = Self::section_name();
        let defaults = serde_json::to_value(Self::default()).unwrap_or_default();

        let fields = Self::field_help()
            .iter()
            .map(|field| FieldDoc {
                key: format!("{}.{}", section, field.name),
                env: format!(
                    "{}__{}__{}",
                    ENV_PREFIX,
                    section.to_uppercase(),
                    field.name.to_uppercase()
                ),
                default: defaults
                    .get(field.name)
                    .cloned()
                    .unwrap_or(serde_json::Value::Null),
                range: field.range,
                help: field.help,
            })
            .collect();

        SectionDoc { section, fields }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionDoc {
    pub section: &'static str,
    pub fields: Vec<FieldDoc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDoc {
    /// Dotted TOML key
    pub key: String,
    /// Environment variable overriding the key
    pub env: String,
    pub default: serde_json::Value,
    pub range: Option<(f64, f64)>,
    pub help: &'static str,
}

/// Shared check for probability fields
pub(crate) fn validate_probability(name: &str, value: f64) -> Result<(), GeneDriftError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GeneDriftError::Configuration(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )));
    }
    Ok(())
}
