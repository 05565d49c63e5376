/*
maze.rs

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

//! Generate random mazes and solve them.
//!
//! A maze is a [`grid::Grid`] of [`cell::Cell`] objects.
//! Each cell has four walls, stored as [`walls::Walls`] flags.
//! A new grid has all its walls up.
//!
//! Solving a maze takes four steps:
//!
//! * Open the entrance and the exit with [`grid::Grid::break_boundary`], usually on the top left
//!   and the bottom right cells.
//!   Doing it first means that the cells drawn during the next step already show the openings.
//!
//! * Carve the passages with a [`generator::Generator`] object and its
//!   [`generator::Generator::generate`] method.
//!   The result is a perfect maze: there is exactly one path between any two cells.
//!
//! * Clear the visited flags with [`grid::Grid::reset_visited`].
//!   The generator and the solver both use these flags, and the solver cannot move if the flags
//!   set by the generator are still there.
//!
//! * Search the path with a [`solver::Solver`] object and its [`solver::Solver::solve`] method.
//!
//! The generator and the solver report their progress to an object that implements
//! [`render::Render`]. The host application provides that object to draw the walls and the
//! solver moves, and to pace the animation.

pub mod cell;
pub mod error;
pub mod generator;
pub mod grid;
pub mod render;
pub mod solver;
pub mod walls;
