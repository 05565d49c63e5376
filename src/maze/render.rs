/*
render.rs

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

//! Animation port.
//!
//! The generator and the solver do not draw anything themselves. They report their progress to an
//! object that implements [`Render`], provided by the host.

use super::cell::{Bounds, Point};
use super::walls::Direction;

/// Drawing operations that the host provides.
pub trait Render {
    /// Draw the wall on the given side of the cell.
    fn draw_wall(&mut self, bounds: &Bounds, side: Direction);

    /// Draw a solver move between two cell centers.
    ///
    /// `undo` is `true` when the solver backs out of a dead end. The host must draw these moves
    /// differently from forward moves.
    fn draw_move(&mut self, from: Point, to: Point, undo: bool);

    /// Let the host display a frame.
    ///
    /// The call returns once the frame is drawn and the host pacing delay has elapsed.
    fn tick(&mut self);
}

/// Renderer that draws nothing, for running the algorithms without a display.
#[derive(Debug, Default)]
pub struct NoRender;

impl Render for NoRender {
    fn draw_wall(&mut self, _bounds: &Bounds, _side: Direction) {}

    fn draw_move(&mut self, _from: Point, _to: Point, _undo: bool) {}

    fn tick(&mut self) {}
}

#[cfg(test)]
pub mod recorder {
    //! [`Render`] implementation that keeps the calls it receives, for tests.

    use super::*;

    /// One call to the renderer.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Event {
        Wall(Bounds, Direction),
        Move(Point, Point, bool),
        Tick,
    }

    #[derive(Debug, Default)]
    pub struct Recorder {
        pub events: Vec<Event>,
    }

    impl Recorder {
        pub fn ticks(&self) -> usize {
            self.events.iter().filter(|e| **e == Event::Tick).count()
        }

        pub fn walls(&self) -> usize {
            self.events
                .iter()
                .filter(|e| matches!(e, Event::Wall(..)))
                .count()
        }

        /// Moves in the order they were drawn, with their undo flag.
        pub fn moves(&self) -> Vec<(Point, Point, bool)> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Move(from, to, undo) => Some((*from, *to, *undo)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Render for Recorder {
        fn draw_wall(&mut self, bounds: &Bounds, side: Direction) {
            self.events.push(Event::Wall(*bounds, side));
        }

        fn draw_move(&mut self, from: Point, to: Point, undo: bool) {
            self.events.push(Event::Move(from, to, undo));
        }

        fn tick(&mut self) {
            self.events.push(Event::Tick);
        }
    }
}
