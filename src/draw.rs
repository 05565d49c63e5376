/*
draw.rs

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

//! Draw the maze in the terminal.
//!
//! The [`Canvas`] object is a surface of characters. One unit of the grid geometry is one
//! character, so the cell width and height are given in characters.

use log::{Level, debug, log_enabled, warn};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::maze::cell::{Bounds, Point};
use crate::maze::error::MazeError;
use crate::maze::grid::Grid;
use crate::maze::render::Render;
use crate::maze::walls::Direction;

const CORNER: char = '+';
const HORIZONTAL_WALL: char = '-';
const VERTICAL_WALL: char = '|';
const FORWARD_MOVE: char = '*';
const UNDO_MOVE: char = '.';

// Clear the terminal and move the cursor to the top left corner.
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Largest number of characters in a line or a column of the canvas.
pub const MAX_CANVAS_SIZE: usize = 10_000;

/// Number of characters needed to reach the given coordinate, if it fits in a canvas.
fn surface_size(extent: f64) -> Option<usize> {
    let last: f64 = extent.max(0.0).ceil();
    if !last.is_finite() || last >= MAX_CANVAS_SIZE as f64 {
        return None;
    }
    (last as usize).checked_add(1)
}

/// Character surface on which the maze is drawn.
#[derive(Debug)]
pub struct Canvas {
    /// Lines of characters.
    surface: Vec<Vec<char>>,

    /// Pause after each frame.
    delay: Duration,

    /// Whether each frame is printed. When `false`, only the final picture is of interest.
    animate: bool,

    /// Number of frames since the canvas was created.
    frames: usize,
}

impl Canvas {
    /// Create a [`Canvas`] object large enough for the grid.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::CanvasTooLarge`] if the grid needs more than
    /// [`MAX_CANVAS_SIZE`] characters in either direction.
    pub fn new(grid: &Grid, delay: Duration, animate: bool) -> Result<Self, MazeError> {
        let extent: Point = grid.extent();
        let too_large = || MazeError::CanvasTooLarge {
            width: extent.x,
            height: extent.y,
            max: MAX_CANVAS_SIZE,
        };
        let width: usize = surface_size(extent.x).ok_or_else(too_large)?;
        let height: usize = surface_size(extent.y).ok_or_else(too_large)?;

        debug!("Canvas {width}x{height} (animation {animate}, delay {delay:?})");
        Ok(Self {
            surface: vec![vec![' '; width]; height],
            delay,
            animate,
            frames: 0,
        })
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Return the surface as text, one line per row.
    pub fn picture(&self) -> String {
        self.surface
            .iter()
            .map(|line| line.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Set the character at the given position. Positions outside the surface are ignored.
    fn plot(&mut self, x: f64, y: f64, c: char) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (x, y) = (x.round() as usize, y.round() as usize);
        if let Some(current) = self.surface.get_mut(y).and_then(|line| line.get_mut(x)) {
            // Wall corners are never overwritten
            if *current != CORNER {
                *current = c;
            }
        }
    }

    /// Draw a line of characters. The first point is skipped when `skip_first` is `true`.
    fn line(&mut self, from: Point, to: Point, c: char, skip_first: bool) {
        let dx: f64 = to.x - from.x;
        let dy: f64 = to.y - from.y;
        let steps: usize = dx.abs().max(dy.abs()).round() as usize;
        if steps == 0 {
            if !skip_first {
                self.plot(from.x, from.y, c);
            }
            return;
        }
        let first: usize = if skip_first { 1 } else { 0 };
        for i in first..=steps {
            let t: f64 = i as f64 / steps as f64;
            self.plot(from.x + dx * t, from.y + dy * t, c);
        }
    }
}

impl Render for Canvas {
    fn draw_wall(&mut self, bounds: &Bounds, side: Direction) {
        let (from, to) = bounds.side(side);
        let c: char = match side {
            Direction::Left | Direction::Right => VERTICAL_WALL,
            Direction::Up | Direction::Down => HORIZONTAL_WALL,
        };
        self.line(from, to, c, false);
        self.plot(from.x, from.y, CORNER);
        self.plot(to.x, to.y, CORNER);
    }

    fn draw_move(&mut self, from: Point, to: Point, undo: bool) {
        if undo {
            // The cell the solver comes back to is still on the path
            self.line(from, to, UNDO_MOVE, true);
        } else {
            self.line(from, to, FORWARD_MOVE, false);
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        if !self.animate {
            return;
        }
        let mut stdout = io::stdout().lock();
        if let Err(e) =
            writeln!(stdout, "{CLEAR_SCREEN}{}", self.picture()).and_then(|()| stdout.flush())
        {
            warn!("Cannot draw frame {}: {e}", self.frames);
        }
        if log_enabled!(Level::Debug) && self.frames.is_multiple_of(100) {
            debug!("Frame {}", self.frames);
        }
        thread::sleep(self.delay);
    }
}
