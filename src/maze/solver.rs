/*
solver.rs

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

//! Find a path through the maze.
//!
//! The solver is a depth-first search that tries the neighbors in the fixed
//! [`Direction::all`] order. Each move is drawn; a move that leads to a dead end is drawn again as
//! an undo move when the search backs out of it. A dead-end cell gets its visited flag cleared so
//! that another branch can go through it later.

use log::debug;
use std::time::Instant;

use super::error::MazeError;
use super::grid::Grid;
use super::render::Render;
use super::walls::Direction;

/// Cell being explored, and the index of the next direction to try from it.
struct Frame {
    row: usize,
    col: usize,
    next: usize,
}

/// [`Solver`] object.
#[derive(Debug)]
pub struct Solver {
    /// Cell to reach.
    exit: (usize, usize),

    /// Cells from the start to the exit, after a successful search.
    path: Vec<(usize, usize)>,

    /// Number of forward moves during the last search.
    pub moves: usize,

    /// Number of moves that have been undone during the last search.
    pub backtracks: usize,

    /// Duration in seconds of the last search.
    pub duration: f32,
}

impl Solver {
    /// Create a solver that looks for the bottom right cell of the grid.
    pub fn new(grid: &Grid) -> Self {
        Self {
            exit: grid.last_cell(),
            path: Vec::new(),
            moves: 0,
            backtracks: 0,
            duration: 0.0,
        }
    }

    /// Create a solver that looks for the given exit cell.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::OutOfBounds`] if the cell is not in the grid.
    pub fn with_exit(grid: &Grid, row: usize, col: usize) -> Result<Self, MazeError> {
        grid.cell_at(row, col)?;
        let mut solver: Solver = Self::new(grid);
        solver.exit = (row, col);
        Ok(solver)
    }

    /// Exit cell.
    pub fn exit(&self) -> (usize, usize) {
        self.exit
    }

    /// Solution found by the last successful search, from start to exit.
    pub fn path(&self) -> &[(usize, usize)] {
        &self.path
    }

    /// Search a path from the given cell to the exit.
    ///
    /// The visited flags of the grid must be cleared before the search (see
    /// [`Grid::reset_visited`]). On success, the cells of the path stay visited.
    ///
    /// Return `false` if the exit cannot be reached. This is not an error.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::OutOfBounds`] if the starting cell or the exit cell is not
    /// in the grid.
    pub fn solve<R: Render + ?Sized>(
        &mut self,
        grid: &mut Grid,
        start_row: usize,
        start_col: usize,
        render: &mut R,
    ) -> Result<bool, MazeError> {
        let start: Instant = Instant::now();
        self.path.clear();
        self.moves = 0;
        self.backtracks = 0;
        self.duration = 0.0;
        grid.cell_at(self.exit.0, self.exit.1)?;

        debug!(
            "Solving from ({start_row}, {start_col}) to ({}, {})",
            self.exit.0, self.exit.1
        );

        let mut stack: Vec<Frame> = Vec::with_capacity(grid.rows() * grid.cols());
        let found: bool = if self.enter(grid, start_row, start_col, render)? {
            self.path.push((start_row, start_col));
            true
        } else {
            stack.push(Frame {
                row: start_row,
                col: start_col,
                next: 0,
            });
            self.search(grid, &mut stack, render)?
        };

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Found = {found}  Moves = {}  Backtracks = {}  Duration = {}",
            self.moves, self.backtracks, self.duration
        );
        Ok(found)
    }

    /// Mark the cell visited and return whether it is the exit.
    fn enter<R: Render + ?Sized>(
        &self,
        grid: &mut Grid,
        row: usize,
        col: usize,
        render: &mut R,
    ) -> Result<bool, MazeError> {
        grid.cell_at_mut(row, col)?.visited = true;
        render.tick();
        Ok((row, col) == self.exit)
    }

    /// Depth-first search from the cell at the top of the stack.
    fn search<R: Render + ?Sized>(
        &mut self,
        grid: &mut Grid,
        stack: &mut Vec<Frame>,
        render: &mut R,
    ) -> Result<bool, MazeError> {
        while let Some(frame) = stack.last_mut() {
            let (row, col) = (frame.row, frame.col);

            // Next direction that leads to an unvisited cell through an open wall
            let mut step: Option<(usize, usize)> = None;
            while let Some(direction) = Direction::from_repr(frame.next) {
                frame.next += 1;
                if !grid.has_passage(row, col, direction) {
                    continue;
                }
                if let Some((r, c)) = grid.neighbor(row, col, direction)
                    && !grid.cell_at(r, c)?.visited
                {
                    step = Some((r, c));
                    break;
                }
            }

            match step {
                Some((r, c)) => {
                    debug!("== Going from ({row}, {col}) to ({r}, {c})");
                    render.draw_move(grid.center(row, col), grid.center(r, c), false);
                    self.moves += 1;
                    if self.enter(grid, r, c, render)? {
                        self.path = stack.iter().map(|f| (f.row, f.col)).collect();
                        self.path.push((r, c));
                        return Ok(true);
                    }
                    stack.push(Frame {
                        row: r,
                        col: c,
                        next: 0,
                    });
                }
                None => {
                    debug!("    Back: ({row}, {col}) is a dead end");
                    grid.cell_at_mut(row, col)?.visited = false;
                    stack.pop();
                    if let Some(parent) = stack.last() {
                        render.draw_move(
                            grid.center(parent.row, parent.col),
                            grid.center(row, col),
                            true,
                        );
                        self.backtracks += 1;
                    }
                }
            }
        }
        Ok(false)
    }
}
