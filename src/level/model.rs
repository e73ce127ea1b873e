//! Level document model.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::tiles::{Grid, TileId};

/// Placement of a tilemap layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilemapSettings {
    pub solid: bool,
    pub z_pos: i32,
}

impl Default for TilemapSettings {
    /// The solid obstacle layer at depth 0.
    fn default() -> Self {
        Self {
            solid: true,
            z_pos: 0,
        }
    }
}

/// A converted tile layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tilemap {
    pub solid: bool,
    pub z_pos: i32,
    pub tiles: Grid<TileId>,
}

impl Tilemap {
    pub fn new(settings: TilemapSettings, tiles: Grid<TileId>) -> Self {
        Self {
            solid: settings.solid,
            z_pos: settings.z_pos,
            tiles,
        }
    }
}

/// Everything that goes into one level file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDocument {
    pub name: String,
    pub author: String,
    pub license: String,
    pub entities: Vec<Entity>,
    pub tilemaps: Vec<Tilemap>,
}
