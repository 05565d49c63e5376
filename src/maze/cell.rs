/*
cell.rs

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

//! Maze cell and its geometry.

use serde::{Deserialize, Serialize};

use super::walls::{Direction, Walls};

/// Position in the drawing surface.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle that a cell occupies in the drawing surface.
///
/// (`x1`, `y1`) is the top left corner and (`x2`, `y2`) the bottom right corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Bounds {
    /// Center of the rectangle. Solver moves are drawn from center to center.
    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Return the two ends of the line for the wall on the given side.
    pub fn side(&self, direction: Direction) -> (Point, Point) {
        match direction {
            Direction::Left => (Point::new(self.x1, self.y1), Point::new(self.x1, self.y2)),
            Direction::Right => (Point::new(self.x2, self.y1), Point::new(self.x2, self.y2)),
            Direction::Up => (Point::new(self.x1, self.y1), Point::new(self.x2, self.y1)),
            Direction::Down => (Point::new(self.x1, self.y2), Point::new(self.x2, self.y2)),
        }
    }
}

/// Single unit of the maze grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Cell {
    /// Row of the cell in the grid.
    pub row: usize,

    /// Column of the cell in the grid.
    pub col: usize,

    /// Walls that are still standing.
    pub walls: Walls,

    /// Traversal marker.
    /// The generator and then the solver use it, so it must be reset between the two passes.
    #[serde(skip)]
    pub visited: bool,
}

impl Cell {
    /// Create a closed, unvisited cell.
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            walls: Walls::default(),
            visited: false,
        }
    }

    /// Whether the wall on the given side is standing.
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.contains(direction.wall())
    }

    /// Walls still standing, in the fixed direction order.
    pub fn standing_walls(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::all().filter(|d| self.has_wall(*d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_in_the_middle() {
        let b = Bounds {
            x1: 10.0,
            y1: 20.0,
            x2: 14.0,
            y2: 22.0,
        };
        assert_eq!(b.center(), Point::new(12.0, 21.0));
    }

    #[test]
    fn side_lines_follow_the_rectangle() {
        let b = Bounds {
            x1: 0.0,
            y1: 0.0,
            x2: 4.0,
            y2: 2.0,
        };
        assert_eq!(
            b.side(Direction::Down),
            (Point::new(0.0, 2.0), Point::new(4.0, 2.0))
        );
        assert_eq!(
            b.side(Direction::Right),
            (Point::new(4.0, 0.0), Point::new(4.0, 2.0))
        );
    }

    #[test]
    fn standing_walls_shrink_when_walls_are_removed() {
        let mut c = Cell::new(1, 2);
        assert_eq!(c.standing_walls().count(), 4);
        c.walls.remove(Walls::LEFT);
        assert!(!c.has_wall(Direction::Left));
        assert_eq!(
            c.standing_walls().collect::<Vec<_>>(),
            vec![Direction::Right, Direction::Up, Direction::Down]
        );
    }
}
