use chrono::NaiveDate;

use crate::error::StoreError;

/// Settings of a people graph, usually read from a TOML file.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Whether `__schema` and `__type` queries are answered.
    pub introspection: bool,
    pub operation_limits: OperationLimitsConfig,
    /// Replaces the built-in mock people when set.
    pub people: Option<Vec<PersonSeed>>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        SchemaConfig {
            introspection: true,
            operation_limits: OperationLimitsConfig::default(),
            people: None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OperationLimitsConfig {
    pub depth: Option<usize>,
    pub complexity: Option<usize>,
}

/// A person to start the graph with. Height in centimeters, weight in kilograms.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonSeed {
    pub id: u64,
    pub name: String,
    pub height: f64,
    pub weight: f64,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub friends: Vec<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("person {0} is defined more than once")]
    DuplicateId(u64),
    #[error("person {id} is invalid: {source}")]
    InvalidPerson {
        id: u64,
        #[source]
        source: StoreError,
    },
}
