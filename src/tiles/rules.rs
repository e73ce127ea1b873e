//! Find/replace conversion rules.

use crate::error::{Result, TylerError};
use serde::{Deserialize, Serialize};

use super::signature::{TileCell, TileId, TileSignature};

/// A horizontal run of source signatures and the tile IDs that replace it,
/// cell for cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRule {
    pub find: Vec<TileSignature>,
    pub replace: Vec<TileId>,
}

impl ConversionRule {
    pub fn new(find: Vec<TileSignature>, replace: Vec<TileId>) -> Self {
        Self { find, replace }
    }

    /// Width of the matched window.
    pub fn len(&self) -> usize {
        self.find.len()
    }

    pub fn is_empty(&self) -> bool {
        self.find.is_empty()
    }

    /// Check the rule is usable: a non-empty find pattern of non-empty
    /// signatures, with exactly one replacement per found cell.
    pub fn validate(&self) -> Result<()> {
        if self.find.is_empty() {
            return Err(TylerError::ConfigError(
                "find pattern must contain at least one tile".to_string(),
            ));
        }

        if self.find.len() != self.replace.len() {
            return Err(TylerError::ConfigError(format!(
                "find has {} tiles but replace has {}",
                self.find.len(),
                self.replace.len()
            )));
        }

        if self.find.iter().any(|sig| sig.parts().is_empty()) {
            return Err(TylerError::ConfigError(
                "find pattern contains an empty tile signature".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether the window starting at column `x` matches. Cells that were
    /// already converted never match, and a window may not run past the
    /// end of the row.
    pub fn matches_at(&self, row: &[TileCell], x: usize) -> bool {
        let Some(window) = row.get(x..x + self.len()) else {
            return false;
        };

        window
            .iter()
            .zip(&self.find)
            .all(|(cell, expected)| cell.signature() == Some(expected))
    }

    /// Overwrite the window starting at column `x` with the replacement IDs.
    pub fn replace_at(&self, row: &mut [TileCell], x: usize) {
        for (cell, &id) in row[x..x + self.len()].iter_mut().zip(&self.replace) {
            *cell = TileCell::Converted(id);
        }
    }
}

/// Obstacle conversions for the arctic tileset.
///
/// Order matters: the two-tile edge patterns must run before the lone
/// `[0,13]` rule, which would otherwise swallow their left or right cell.
pub fn default_obstacle_conversions() -> Vec<ConversionRule> {
    vec![
        ConversionRule::new(vec![[0, 13].into(), [0, 0].into()], vec![12, 0]),
        ConversionRule::new(vec![[0, 0].into(), [0, 13].into()], vec![0, 10]),
        ConversionRule::new(vec![[0, 13].into()], vec![11]),
    ]
}
