//! Serialization of entities, tile grids and whole levels into SuperTux
//! S-expression text.

use super::entity::Entity;
use super::model::{LevelDocument, Tilemap};
use super::template::{render_template, vars};
use super::templates::Templates;
use crate::error::Result;
use crate::tiles::{Grid, TileId};

/// Indentation of tile rows and entity fields inside the sector.
const FIELD_INDENT: &str = "      ";

/// Render one entity as a named block with one line per field.
pub fn format_entity(entity: &Entity) -> String {
    let fields: Vec<String> = entity
        .fields()
        .into_iter()
        .map(|(key, value)| format!("{}({} {})", FIELD_INDENT, key, value))
        .collect();

    format!("({}\n{}\n    )", entity.type_name(), fields.join("\n"))
}

pub fn format_entities(entities: &[Entity]) -> String {
    entities
        .iter()
        .map(format_entity)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a grid of tile IDs, one indented line per row.
///
/// Every ID is followed by a space and every row by a newline; the block
/// starts with a newline so it can follow `(tiles` directly.
pub fn format_tiles(tiles: &Grid<TileId>) -> String {
    let mut formatted = String::from("\n");

    for row in tiles.rows() {
        formatted.push_str(FIELD_INDENT);
        for id in row {
            formatted.push_str(&id.to_string());
            formatted.push(' ');
        }
        formatted.push('\n');
    }

    formatted
}

pub fn format_tilemap(tilemap: &Tilemap, templates: &Templates) -> Result<String> {
    let vars = vars([
        ("solid", (if tilemap.solid { "t" } else { "f" }).to_string()),
        ("zPos", tilemap.z_pos.to_string()),
        ("width", tilemap.tiles.width().to_string()),
        ("height", tilemap.tiles.height().to_string()),
        ("tiles", format_tiles(&tilemap.tiles)),
    ]);

    Ok(render_template(&templates.tilemap, &vars)?)
}

/// Assemble the complete level document.
///
/// Values are inserted as-is; quotes in names or authors are not escaped.
pub fn format_level(level: &LevelDocument, templates: &Templates) -> Result<String> {
    let tilemaps = level
        .tilemaps
        .iter()
        .map(|tilemap| format_tilemap(tilemap, templates))
        .collect::<Result<Vec<_>>>()?;

    let vars = vars([
        ("name", level.name.clone()),
        ("author", level.author.clone()),
        ("license", level.license.clone()),
        ("entities", format_entities(&level.entities)),
        ("tilemaps", tilemaps.join("\n")),
    ]);

    Ok(render_template(&templates.level, &vars)?.trim().to_string())
}
