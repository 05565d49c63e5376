/*
generator.rs

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

//! Carve a random perfect maze.
//!
//! The generator is a randomized depth-first search (recursive backtracker). From the current cell
//! it moves to a random unvisited neighbor and removes the wall between the two cells. When a cell
//! has no unvisited neighbor left, it is drawn and the search backs up to the previous cell.
//! Because the search only enters unvisited cells, the passages form a spanning tree of the grid:
//! there is exactly one path between any two cells.
//!
//! The search uses a stack of cells instead of recursion, so that large grids do not overflow the
//! call stack. The order of the visits and of the random draws is the same as with recursion.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use super::error::MazeError;
use super::grid::Grid;
use super::render::Render;
use super::walls::Direction;

/// [`Generator`] object.
pub struct Generator {
    /// Random number generator. Seeded from the operating system unless a seed is provided.
    rng: StdRng,

    /// Seed used to create the random number generator, if any.
    pub seed: Option<u64>,

    /// Number of passages carved during the last generation.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last maze.
    pub duration: f32,
}

impl Generator {
    /// Create the object.
    ///
    /// Two generators created with the same seed produce the same maze for the same grid
    /// dimensions.
    pub fn new(seed: Option<u64>) -> Self {
        let rng: StdRng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            seed,
            iteration: 0,
            duration: 0.0,
        }
    }

    /// Carve the maze, starting from the given cell.
    ///
    /// The grid is expected to be fresh: all walls up and no cell visited. Visited cells are
    /// treated as already carved and are never entered. On return, all the reachable cells are
    /// marked visited; call [`Grid::reset_visited`] before solving the maze.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::OutOfBounds`] if the starting cell is not in the grid.
    pub fn generate<R: Render + ?Sized>(
        &mut self,
        grid: &mut Grid,
        start_row: usize,
        start_col: usize,
        render: &mut R,
    ) -> Result<(), MazeError> {
        let start: Instant = Instant::now();
        self.iteration = 0;
        self.duration = 0.0;

        grid.cell_at_mut(start_row, start_col)?.visited = true;
        let mut stack: Vec<(usize, usize)> = Vec::with_capacity(grid.rows() * grid.cols());
        stack.push((start_row, start_col));

        debug!(
            "Generating a {}x{} maze from ({start_row}, {start_col}) with seed {:?}",
            grid.rows(),
            grid.cols(),
            self.seed
        );

        while let Some(&(row, col)) = stack.last() {
            let candidates: Vec<(Direction, (usize, usize))> = Direction::all()
                .filter_map(|d| grid.neighbor(row, col, d).map(|n| (d, n)))
                .filter(|(_, (r, c))| grid.cell_at(*r, *c).is_ok_and(|cell| !cell.visited))
                .collect();

            if candidates.is_empty() {
                // Dead end: the cell walls are final
                grid.draw_cell(row, col, render)?;
                render.tick();
                stack.pop();
                continue;
            }

            let (direction, (r, c)) = candidates[self.rng.random_range(0..candidates.len())];
            grid.carve(row, col, direction)?;
            grid.cell_at_mut(r, c)?.visited = true;
            self.iteration += 1;
            debug!("    Carving ({row}, {col}) {direction:?} to ({r}, {c})");
            stack.push((r, c));
        }

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Passages = {}  Duration = {}",
            self.iteration, self.duration
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::cell::Point;
    use crate::maze::render::NoRender;
    use crate::maze::render::recorder::Recorder;
    use crate::maze::walls::Walls;
    use std::collections::VecDeque;

    fn generated(rows: usize, cols: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(Point::default(), rows, cols, 4.0, 2.0).unwrap();
        Generator::new(Some(seed))
            .generate(&mut grid, 0, 0, &mut NoRender)
            .unwrap();
        grid
    }

    fn layout(grid: &Grid) -> Vec<Walls> {
        grid.cells().map(|c| c.walls).collect()
    }

    /// Number of cells reachable from (0, 0) through the passages.
    fn reachable(grid: &Grid) -> usize {
        let mut seen = vec![vec![false; grid.cols()]; grid.rows()];
        let mut queue = VecDeque::from([(0, 0)]);
        seen[0][0] = true;
        let mut count = 0;
        while let Some((row, col)) = queue.pop_front() {
            count += 1;
            for d in Direction::all() {
                if grid.has_passage(row, col, d) {
                    let (r, c) = grid.neighbor(row, col, d).unwrap();
                    if !seen[r][c] {
                        seen[r][c] = true;
                        queue.push_back((r, c));
                    }
                }
            }
        }
        count
    }

    #[test_log::test]
    fn generated_maze_is_a_spanning_tree() {
        for (rows, cols, seed) in [(1, 1, 0), (1, 9, 1), (7, 1, 2), (10, 12, 3), (25, 40, 4)] {
            let grid = generated(rows, cols, seed);
            assert_eq!(grid.passages(), rows * cols - 1, "{rows}x{cols}");
            assert_eq!(reachable(&grid), rows * cols, "{rows}x{cols}");
        }
    }

    #[test_log::test]
    fn walls_stay_symmetric() {
        let grid = generated(15, 20, 42);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                for d in Direction::all() {
                    if let Some((r, c)) = grid.neighbor(row, col, d) {
                        assert_eq!(
                            grid.cell_at(row, col).unwrap().has_wall(d),
                            grid.cell_at(r, c).unwrap().has_wall(d.opposite())
                        );
                    }
                }
            }
        }
        assert!(grid.validate().is_ok());
    }

    #[test_log::test]
    fn outer_walls_are_untouched() {
        let grid = generated(6, 6, 7);
        for cell in grid.cells() {
            for d in Direction::all() {
                if grid.neighbor(cell.row, cell.col, d).is_none() {
                    assert!(cell.has_wall(d));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        assert_eq!(layout(&generated(12, 16, 1234)), layout(&generated(12, 16, 1234)));
    }

    #[test]
    fn different_seeds_differ() {
        // With 400 cells, two seeds giving the same maze would be a broken generator
        assert_ne!(layout(&generated(20, 20, 1)), layout(&generated(20, 20, 2)));
    }

    #[test]
    fn all_cells_are_visited_and_counted() {
        let mut grid = Grid::new(Point::default(), 8, 5, 1.0, 1.0).unwrap();
        let mut generator = Generator::new(Some(9));
        generator
            .generate(&mut grid, 3, 2, &mut NoRender)
            .unwrap();
        assert!(grid.cells().all(|c| c.visited));
        assert_eq!(generator.iteration, 39);
    }

    #[test]
    fn every_cell_is_drawn_once() {
        let mut grid = Grid::new(Point::default(), 4, 6, 1.0, 1.0).unwrap();
        let mut rec = Recorder::default();
        Generator::new(Some(5))
            .generate(&mut grid, 0, 0, &mut rec)
            .unwrap();
        assert_eq!(rec.ticks(), 24);
        let standing: usize = grid.cells().map(|c| c.standing_walls().count()).sum();
        assert_eq!(rec.walls(), standing);
    }

    #[test]
    fn large_maze_does_not_overflow_the_stack() {
        let grid = generated(150, 150, 11);
        assert_eq!(grid.passages(), 150 * 150 - 1);
    }

    #[test]
    fn start_outside_grid_is_an_error() {
        let mut grid = Grid::new(Point::default(), 2, 2, 1.0, 1.0).unwrap();
        let res = Generator::new(Some(0)).generate(&mut grid, 2, 0, &mut NoRender);
        assert!(matches!(res, Err(MazeError::OutOfBounds { .. })));
    }
}
