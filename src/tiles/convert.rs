//! Pattern matching and sanitizing of tile grids.

use tracing::{debug, warn};

use super::grid::Grid;
use super::rules::ConversionRule;
use super::signature::{TileCell, TileId};

/// Tile ID written into cells that no rule converted.
pub const DEFAULT_TILE_ID: TileId = 0;

/// Convert a source grid into tile IDs.
///
/// The source grid is left untouched; rules run against a copy, then any
/// cell still holding a raw signature falls back to [`DEFAULT_TILE_ID`].
pub fn convert_tiles(source: &Grid<TileCell>, rules: &[ConversionRule]) -> Grid<TileId> {
    let mut tiles = source.clone();

    apply_rules(&mut tiles, rules);

    let fallback = sanitize(&mut tiles);
    if fallback > 0 {
        warn!(
            cells = fallback,
            "unmatched tiles replaced with tile {}", DEFAULT_TILE_ID
        );
    }

    tiles.map(|cell| match cell {
        TileCell::Converted(id) => id,
        TileCell::Unconverted(_) => DEFAULT_TILE_ID,
    })
}

/// Run every rule over every row, in order, converting cells in place.
///
/// Returns the number of matches made by each rule.
pub fn apply_rules(tiles: &mut Grid<TileCell>, rules: &[ConversionRule]) -> Vec<usize> {
    let mut counts = vec![0; rules.len()];

    for row in tiles.rows_mut() {
        for (rule, count) in rules.iter().zip(counts.iter_mut()) {
            *count += apply_rule_to_row(row, rule);
        }
    }

    for (i, (rule, count)) in rules.iter().zip(&counts).enumerate() {
        debug!(rule = i, width = rule.len(), matches = count, "applied conversion rule");
    }

    counts
}

/// Scan one row left to right. Each start column is tried on its own; a
/// match converts its cells at once so later windows cannot reuse them.
fn apply_rule_to_row(row: &mut [TileCell], rule: &ConversionRule) -> usize {
    if rule.is_empty() || rule.len() > row.len() {
        return 0;
    }

    let mut matches = 0;
    for x in 0..=row.len() - rule.len() {
        if rule.matches_at(row, x) {
            rule.replace_at(row, x);
            matches += 1;
        }
    }

    matches
}

/// Replace every unconverted cell with [`DEFAULT_TILE_ID`].
///
/// Returns how many cells were replaced; a second pass always returns 0.
pub fn sanitize(tiles: &mut Grid<TileCell>) -> usize {
    let mut replaced = 0;

    for cell in tiles.rows_mut().flatten() {
        if !cell.is_converted() {
            *cell = TileCell::Converted(DEFAULT_TILE_ID);
            replaced += 1;
        }
    }

    replaced
}
