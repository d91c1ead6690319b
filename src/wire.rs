//! The numbered-array wire format.
//!
//! External callers exchange grids as plain 2D arrays of color numbers
//! (1..=8) with no traversal flags; this module converts between that shape
//! and [`Grid`], validating the input on the way in. Converting to a `Grid`
//! re-seeds the origin region with one [`traverse`] step, so the
//! region-coherence invariant holds before the core ever sees the grid.

use crate::engine::{traverse, Grid, Tile, TileColor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when validating a wire-format grid.
///
/// These cover every way external input can be malformed; a grid that passes
/// is well-formed by the core's definition and the core itself stays
/// infallible.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("grid has no rows")]
    EmptyGrid,

    #[error("row {0} is empty")]
    EmptyRow(usize),

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown color number {value} at row {row} col {col}")]
    UnknownColor { value: u8, row: usize, col: usize },
}

/// Request payload carrying a wire-format grid, matching the JSON body
/// accepted by transport wrappers: `{"grid": [[1, 2], [3, 1]]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub grid: Vec<Vec<u8>>,
}

/// Response payload for a single next-move query. `color` is `None` when the
/// puzzle is already solved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextMoveResponse {
    pub color: Option<u8>,
}

/// Response payload for a full-game solve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionResponse {
    pub colors: Vec<u8>,
}

/// Builds a [`Grid`] from a wire-format 2D color-number array.
///
/// Validates that the input is non-empty, rectangular, and uses only known
/// color numbers, then applies one [`traverse`] step toward the origin's
/// color to restore the origin-region invariant.
///
/// # Examples
///
/// ```
/// use floodit_solver::wire::{grid_from_wire, WireError};
///
/// let grid = grid_from_wire(&[vec![1, 1], vec![2, 1]]).unwrap();
/// assert_eq!(grid.tiles().filter(|t| t.traversed).count(), 3);
///
/// assert_eq!(grid_from_wire(&[]), Err(WireError::EmptyGrid));
/// ```
pub fn grid_from_wire(rows: &[Vec<u8>]) -> Result<Grid, WireError> {
    if rows.is_empty() {
        return Err(WireError::EmptyGrid);
    }
    let expected = rows[0].len();

    let mut tiles = Vec::with_capacity(rows.len());
    for (x, row) in rows.iter().enumerate() {
        if row.is_empty() {
            return Err(WireError::EmptyRow(x));
        }
        if row.len() != expected {
            return Err(WireError::RaggedRow {
                row: x,
                expected,
                found: row.len(),
            });
        }

        let mut tile_row = Vec::with_capacity(expected);
        for (y, &value) in row.iter().enumerate() {
            let color = TileColor::from_number(value).ok_or(WireError::UnknownColor {
                value,
                row: x,
                col: y,
            })?;
            tile_row.push(Tile {
                color,
                traversed: false,
            });
        }
        tiles.push(tile_row);
    }

    let raw = Grid::from_tiles(tiles);
    Ok(traverse(&raw, raw.region_color()))
}

/// Projects a [`Grid`] back to the wire format, dropping the traversal flags.
pub fn grid_to_wire(grid: &Grid) -> Vec<Vec<u8>> {
    (0..grid.rows())
        .map(|x| {
            (0..grid.columns())
                .filter_map(|y| grid.tile(x, y).map(|tile| tile.color.to_number()))
                .collect()
        })
        .collect()
}
