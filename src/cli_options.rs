/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate and solve a 10x12 maze, animating both steps:
//!
//! ```
//! $ mazesolver
//! ```
//!
//! Generate a reproducible maze, save it, and only print the result:
//!
//! ```
//! $ mazesolver -r 20 -c 30 -s 1234 --no-animation --save maze.json
//! ```
//!
//! Solve a saved maze again, slowly:
//!
//! ```
//! $ mazesolver --load maze.json --delay 0.2
//! ```

use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Largest number of rows or columns.
const MAX_SIDE: i64 = 1000;

/// Generate a random maze and find a path through it.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Number of rows
    #[arg(
        short,
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..=MAX_SIDE)
    )]
    pub rows: u32,

    /// Number of columns
    #[arg(
        short,
        long,
        default_value_t = 12,
        value_parser = clap::value_parser!(u32).range(1..=MAX_SIDE)
    )]
    pub cols: u32,

    /// Width of a cell, in characters
    #[arg(long, default_value_t = 4)]
    pub cell_width: u16,

    /// Height of a cell, in characters
    #[arg(long, default_value_t = 2)]
    pub cell_height: u16,

    /// Horizontal offset of the maze, in characters
    #[arg(long, default_value_t = 0)]
    pub origin_x: u16,

    /// Vertical offset of the maze, in characters
    #[arg(long, default_value_t = 0)]
    pub origin_y: u16,

    /// Seed for the random generator. The same seed always produces the same maze
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Pause between two animation frames, in seconds
    #[arg(long, default_value_t = 0.05)]
    pub delay: f64,

    /// Only print the final maze
    #[arg(short, long, default_value_t = false)]
    pub no_animation: bool,

    /// Save the generated maze in this JSON file
    #[arg(long, conflicts_with = "load")]
    pub save: Option<PathBuf>,

    /// Solve the maze from this JSON file instead of generating one
    #[arg(long)]
    pub load: Option<PathBuf>,

    /// Print some statistics at the end
    #[arg(long, default_value_t = false)]
    pub summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Pause between two frames.
    ///
    /// Negative or invalid values mean no pause.
    pub fn frame_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay).unwrap_or(Duration::ZERO)
    }
}

/// Parse the command-line options and initialize the logger.
pub fn parse() -> Args {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    args
}
