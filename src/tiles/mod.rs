//! Tile grids and the find/replace conversion that turns Tyler tile
//! signatures into SuperTux tile IDs.

mod convert;
mod grid;
mod rules;
mod signature;


// Re-export public API
pub use convert::{DEFAULT_TILE_ID, apply_rules, convert_tiles, sanitize};
pub use grid::Grid;
pub use rules::{ConversionRule, default_obstacle_conversions};
pub use signature::{TileCell, TileId, TileSignature};
