//! Config struct definition and default implementation.

use super::types::*;
use crate::level::{Entity, Templates, TilemapSettings, default_entities};
use crate::tiles::{ConversionRule, default_obstacle_conversions};
use serde::{Deserialize, Serialize};

/// Configuration for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Level metadata
    // =========================================================================
    /// Level title shown in the game.
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_author")]
    pub author: String,

    #[serde(default = "default_license")]
    pub license: String,

    // =========================================================================
    // Sector content
    // =========================================================================
    /// Entities placed in the sector, in output order.
    #[serde(default = "default_entities")]
    pub entities: Vec<Entity>,

    /// Solidity and depth of the converted obstacle layer.
    #[serde(default)]
    pub obstacle_tilemap: TilemapSettings,

    /// Rules turning Tyler signatures into obstacle tile IDs, applied in order.
    #[serde(default = "default_obstacle_conversions")]
    pub obstacle_conversions: Vec<ConversionRule>,

    // =========================================================================
    // Output
    // =========================================================================
    /// Level and tilemap templates.
    #[serde(default)]
    pub templates: Templates,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            author: default_author(),
            license: default_license(),
            entities: default_entities(),
            obstacle_tilemap: TilemapSettings::default(),
            obstacle_conversions: default_obstacle_conversions(),
            templates: Templates::default(),
        }
    }
}
