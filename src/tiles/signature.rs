//! Raw tile signatures and the two-state grid cell.

use serde::{Deserialize, Serialize};

/// Target engine tile ID.
pub type TileId = u32;

/// Raw source tile, e.g. `[tileset, index]`, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileSignature(Vec<i32>);

impl TileSignature {
    pub fn parts(&self) -> &[i32] {
        &self.0
    }
}

impl<const N: usize> From<[i32; N]> for TileSignature {
    fn from(parts: [i32; N]) -> Self {
        Self(parts.to_vec())
    }
}

/// A grid cell, either still holding its source signature or already
/// resolved to a tile ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileCell {
    Unconverted(TileSignature),
    Converted(TileId),
}

impl TileCell {
    /// The source signature, if this cell has not been converted yet.
    pub fn signature(&self) -> Option<&TileSignature> {
        match self {
            TileCell::Unconverted(signature) => Some(signature),
            TileCell::Converted(_) => None,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, TileCell::Converted(_))
    }
}

impl From<TileSignature> for TileCell {
    fn from(signature: TileSignature) -> Self {
        TileCell::Unconverted(signature)
    }
}
