//! Rectangular 2D grids.

use crate::error::{Result, TylerError};
use std::path::Path;

use super::signature::{TileCell, TileSignature};

/// A non-empty rectangular grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
    width: usize,
}

impl<T> Grid<T> {
    /// Build a grid from rows, rejecting empty and jagged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            Some(_) => {
                return Err(TylerError::InputError("row 0 has no columns".to_string()));
            }
            None => return Err(TylerError::InputError("grid has no rows".to_string())),
        };

        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(TylerError::InputError(format!(
                "row {} has {} columns, expected {} (grid must be rectangular)",
                y,
                row.len(),
                width
            )));
        }

        Ok(Self { rows, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Mutable row slices; rows can be edited but not resized.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.rows.iter_mut().map(Vec::as_mut_slice)
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Grid<U> {
        Grid {
            rows: self
                .rows
                .into_iter()
                .map(|row| row.into_iter().map(&mut f).collect::<Vec<U>>())
                .collect(),
            width: self.width,
        }
    }
}

impl Grid<TileCell> {
    /// Parse a Tyler JSON export: rows of columns of signature arrays.
    pub fn from_json(json: &str) -> Result<Self> {
        let rows: Vec<Vec<TileSignature>> = serde_json::from_str(json)
            .map_err(|e| TylerError::InputError(format!("failed to parse grid JSON: {}", e)))?;

        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(TileCell::from).collect())
                .collect(),
        )
    }

    /// Read and parse a Tyler JSON export from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TylerError::UserError(format!(
                "failed to read input file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }
}
