/*
grid.rs

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

//! Grid of maze cells.

use log::debug;
use serde::{Deserialize, Serialize};

use super::cell::{Bounds, Cell, Point};
use super::error::MazeError;
use super::render::Render;
use super::walls::Direction;

/// Rectangular grid of [`Cell`] objects.
///
/// The grid owns its cells. Cells are addressed by `(row, col)`, starting at `(0, 0)` in the top
/// left corner.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Grid {
    /// Position of the top left corner of the grid in the drawing surface.
    origin: Point,

    /// Number of rows.
    rows: usize,

    /// Number of columns.
    cols: usize,

    /// Width of a cell in the drawing surface.
    cell_width: f64,

    /// Height of a cell in the drawing surface.
    cell_height: f64,

    /// Cells, row by row.
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a [`Grid`] object with all the walls up.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::InvalidDimensions`] if `rows` or `cols` is zero.
    pub fn new(
        origin: Point,
        rows: usize,
        cols: usize,
        cell_width: f64,
        cell_height: f64,
    ) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let cells: Vec<Vec<Cell>> = (0..rows)
            .map(|row| (0..cols).map(|col| Cell::new(row, col)).collect())
            .collect();

        debug!("Grid {rows}x{cols} created (cell size {cell_width}x{cell_height})");
        Ok(Self {
            origin,
            rows,
            cols,
            cell_width,
            cell_height,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Coordinates of the bottom right cell.
    pub fn last_cell(&self) -> (usize, usize) {
        (self.rows - 1, self.cols - 1)
    }

    /// Iterate over all the cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Verify that the coordinates are inside the grid.
    fn check(&self, row: usize, col: usize) -> Result<(), MazeError> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Return the cell at the given coordinates.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, MazeError> {
        self.check(row, col)?;
        Ok(&self.cells[row][col])
    }

    /// Return the cell at the given coordinates, for updating it.
    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, MazeError> {
        self.check(row, col)?;
        Ok(&mut self.cells[row][col])
    }

    /// Clear the visited flag of all the cells.
    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.visited = false;
        }
    }

    /// Rectangle that the cell occupies in the drawing surface.
    ///
    /// The coordinates are not checked. Coordinates outside of the grid return a rectangle
    /// outside of the grid area.
    pub fn bounds(&self, row: usize, col: usize) -> Bounds {
        let x1: f64 = self.origin.x + col as f64 * self.cell_width;
        let y1: f64 = self.origin.y + row as f64 * self.cell_height;
        Bounds {
            x1,
            y1,
            x2: x1 + self.cell_width,
            y2: y1 + self.cell_height,
        }
    }

    /// Center of the cell in the drawing surface.
    pub fn center(&self, row: usize, col: usize) -> Point {
        self.bounds(row, col).center()
    }

    /// Size of the drawing surface that the grid covers, origin included.
    pub fn extent(&self) -> Point {
        self.bounds(self.rows - 1, self.cols - 1).side(Direction::Down).1
    }

    /// Return the coordinates of the neighbor on the given side, if any.
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = direction.offset();
        let r: usize = row.checked_add_signed(dr)?;
        let c: usize = col.checked_add_signed(dc)?;
        if r < self.rows && c < self.cols {
            Some((r, c))
        } else {
            None
        }
    }

    /// Whether it is possible to move from the cell to its neighbor on the given side.
    pub fn has_passage(&self, row: usize, col: usize, direction: Direction) -> bool {
        let Some((r, c)) = self.neighbor(row, col, direction) else {
            return false;
        };
        if self.check(row, col).is_err() {
            return false;
        }
        !self.cells[row][col].has_wall(direction)
            && !self.cells[r][c].has_wall(direction.opposite())
    }

    /// Remove the wall between the cell and its neighbor on the given side.
    ///
    /// Both sides of the wall are removed. Return the coordinates of the neighbor.
    ///
    /// # Errors
    ///
    /// The method returns an error if the cell is not in the grid, or if the wall is on the edge of
    /// the grid. Use [`Grid::break_boundary`] for opening the outer walls.
    pub fn carve(
        &mut self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<(usize, usize), MazeError> {
        self.check(row, col)?;
        let (r, c) = self
            .neighbor(row, col, direction)
            .ok_or(MazeError::NoNeighbor {
                row,
                col,
                direction,
            })?;
        self.cells[row][col].walls.remove(direction.wall());
        self.cells[r][c].walls.remove(direction.opposite().wall());
        Ok((r, c))
    }

    /// Open one outer wall of a boundary cell, for the maze entrance or exit.
    ///
    /// The corners are checked first:
    ///
    /// * the top left cell loses its left wall
    /// * the bottom right cell loses its right wall
    /// * other cells in the top row lose their top wall
    /// * other cells in the bottom row lose their bottom wall
    ///
    /// Return the side that has been opened.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::InvalidBoundaryCell`] for any other cell.
    pub fn break_boundary(&mut self, row: usize, col: usize) -> Result<Direction, MazeError> {
        self.check(row, col)?;
        let (last_row, last_col) = self.last_cell();

        let side: Direction = if row == 0 && col == 0 {
            Direction::Left
        } else if row == last_row && col == last_col {
            Direction::Right
        } else if row == 0 {
            Direction::Up
        } else if row == last_row {
            Direction::Down
        } else {
            return Err(MazeError::InvalidBoundaryCell { row, col });
        };

        self.cells[row][col].walls.remove(side.wall());
        debug!("Boundary of cell ({row}, {col}) opened on the {side:?} side");
        Ok(side)
    }

    /// Draw the walls that are still standing around the cell.
    pub fn draw_cell<R: Render + ?Sized>(
        &self,
        row: usize,
        col: usize,
        render: &mut R,
    ) -> Result<(), MazeError> {
        let cell: &Cell = self.cell_at(row, col)?;
        let bounds: Bounds = self.bounds(row, col);
        for side in cell.standing_walls() {
            render.draw_wall(&bounds, side);
        }
        Ok(())
    }

    /// Number of open passages between adjacent cells.
    ///
    /// Openings in the outer walls are not counted.
    pub fn passages(&self) -> usize {
        let mut count: usize = 0;
        for row in 0..self.rows {
            for col in 0..self.cols {
                for direction in [Direction::Right, Direction::Down] {
                    if self.has_passage(row, col, direction) {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Verify a grid that has been built outside of [`Grid::new`], such as a deserialized grid.
    ///
    /// # Errors
    ///
    /// The method returns an error if the dimensions are not valid, if the cells do not match the
    /// dimensions, if the geometry is not made of finite values with positive cell sizes, or if a
    /// wall is open on one side only.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !self.origin.x.is_finite() || !self.origin.y.is_finite() {
            return Err(MazeError::MalformedGrid(format!(
                "origin ({}, {}) is not finite",
                self.origin.x, self.origin.y
            )));
        }
        for (name, size) in [("width", self.cell_width), ("height", self.cell_height)] {
            if !size.is_finite() || size <= 0.0 {
                return Err(MazeError::MalformedGrid(format!(
                    "cell {name} {size} is not a positive number"
                )));
            }
        }
        if self.cells.len() != self.rows {
            return Err(MazeError::MalformedGrid(format!(
                "{} rows of cells instead of {}",
                self.cells.len(),
                self.rows
            )));
        }
        for (row, line) in self.cells.iter().enumerate() {
            if line.len() != self.cols {
                return Err(MazeError::MalformedGrid(format!(
                    "row {row} has {} cells instead of {}",
                    line.len(),
                    self.cols
                )));
            }
            for (col, cell) in line.iter().enumerate() {
                if cell.row != row || cell.col != col {
                    return Err(MazeError::MalformedGrid(format!(
                        "cell ({}, {}) stored at ({row}, {col})",
                        cell.row, cell.col
                    )));
                }
                for direction in [Direction::Right, Direction::Down] {
                    if let Some((r, c)) = self.neighbor(row, col, direction)
                        && cell.has_wall(direction)
                            != self.cells[r][c].has_wall(direction.opposite())
                    {
                        return Err(MazeError::AsymmetricWall {
                            row,
                            col,
                            direction,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
