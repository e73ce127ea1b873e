//! SuperTux level documents: entities, tilemaps and their text rendering.

mod entity;
mod format;
mod model;
pub mod template;
mod templates;


// Re-export public API
pub use entity::{Entity, FieldValue, default_entities};
pub use format::{format_entities, format_entity, format_level, format_tilemap, format_tiles};
pub use model::{LevelDocument, Tilemap, TilemapSettings};
pub use templates::Templates;
