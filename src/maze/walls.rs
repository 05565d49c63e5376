/*
walls.rs

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

//! Cell walls and movement directions.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

bitflags! {
    /// Walls around a cell.
    ///
    /// A flag in the set means that the wall exists and that moving through that side of the cell
    /// is not possible.
    #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        const TOP    = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT   = 1 << 2;
        const RIGHT  = 1 << 3;
    }
}

impl Default for Walls {
    /// A new cell is a closed box.
    fn default() -> Self {
        Walls::all()
    }
}

/// Move from a cell to one of its four neighbors.
///
/// The order of the variants is the order in which the generator lists the neighbors and in which
/// the solver tries them.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(usize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Number of directions.
    pub const COUNT: usize = 4;

    /// Iterate over the directions in their fixed order.
    pub fn all() -> impl Iterator<Item = Direction> {
        (0..Self::COUNT).filter_map(Direction::from_repr)
    }

    /// Wall that blocks the move.
    pub fn wall(self) -> Walls {
        match self {
            Direction::Left => Walls::LEFT,
            Direction::Right => Walls::RIGHT,
            Direction::Up => Walls::TOP,
            Direction::Down => Walls::BOTTOM,
        }
    }

    /// Direction that goes back to the starting cell.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Row and column offsets of the move.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_are_in_solving_order() {
        let order: Vec<Direction> = Direction::all().collect();
        assert_eq!(
            order,
            vec![
                Direction::Left,
                Direction::Right,
                Direction::Up,
                Direction::Down
            ]
        );
    }

    #[test]
    fn opposite_walls_face_each_other() {
        for d in Direction::all() {
            let (dr, dc) = d.offset();
            let (or, oc) = d.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
            assert_ne!(d.wall(), d.opposite().wall());
        }
    }

    #[test]
    fn new_walls_are_closed() {
        let walls = Walls::default();
        assert!(walls.contains(Walls::TOP | Walls::BOTTOM | Walls::LEFT | Walls::RIGHT));
    }
}
