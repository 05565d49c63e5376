/*
error.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazesolver.

Mazesolver is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazesolver is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazesolver. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Errors raised when the grid is used outside of its contract.
//!
//! None of these errors is transient: they all report a caller mistake and retrying the same call
//! fails again. A maze with no solution is not an error, see [`crate::maze::solver`].

use thiserror::Error;

use super::walls::Direction;

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum MazeError {
    /// Coordinates outside of the grid.
    #[error("Cell ({row}, {col}) is outside of the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The cell is not one of the cells that can receive an entrance or an exit.
    #[error("Cell ({row}, {col}) is not a boundary cell that can be opened")]
    InvalidBoundaryCell { row: usize, col: usize },

    /// The grid must have at least one row and one column.
    #[error("Invalid grid dimensions {rows}x{cols}: rows and columns must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },

    /// The cell has no neighbor on that side.
    #[error("Cell ({row}, {col}) has no neighbor on its {direction:?} side")]
    NoNeighbor {
        row: usize,
        col: usize,
        direction: Direction,
    },

    /// One side of a wall is open, the other is not.
    #[error("Wall {direction:?} of cell ({row}, {col}) does not match its neighbor")]
    AsymmetricWall {
        row: usize,
        col: usize,
        direction: Direction,
    },

    /// The drawing surface of the grid does not fit in a canvas.
    #[error("Canvas of {width}x{height} characters exceeds the {max}x{max} limit")]
    CanvasTooLarge { width: f64, height: f64, max: usize },

    /// The cells do not match the grid dimensions.
    #[error("Malformed grid: {0}")]
    MalformedGrid(String),
}
