/*
lib.rs

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

//! Maze generation and solving.
//!
//! The [`maze`] module holds the grid and the two algorithms. It does not draw anything and does
//! not depend on the other modules.
//! [`draw`] and [`saver`] are the terminal host pieces: a character canvas that implements the
//! [`maze::render::Render`] animation port, and the JSON persistence of a maze layout.

pub mod draw;
pub mod maze;
pub mod saver;
