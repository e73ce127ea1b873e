//! Level entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value written into an entity block. Strings are quoted, numbers are not.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => write!(f, "\"{}\"", s),
            FieldValue::Int(n) => write!(f, "{}", n),
        }
    }
}

/// An object placed in the level sector.
///
/// The `type` key selects the variant when read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entity {
    /// Where the player starts.
    Spawnpoint { name: String, x: i64, y: i64 },
}

impl Entity {
    /// The S-expression head for this entity.
    pub fn type_name(&self) -> &'static str {
        match self {
            Entity::Spawnpoint { .. } => "spawnpoint",
        }
    }

    /// Fields in output order.
    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        match self {
            Entity::Spawnpoint { name, x, y } => vec![
                ("name", FieldValue::Str(name.clone())),
                ("x", FieldValue::Int(*x)),
                ("y", FieldValue::Int(*y)),
            ],
        }
    }
}

/// The player spawn the converter always places.
pub fn default_entities() -> Vec<Entity> {
    vec![Entity::Spawnpoint {
        name: "main".to_string(),
        x: 16,
        y: 50,
    }]
}
