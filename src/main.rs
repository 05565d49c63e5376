/*
main.rs

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

mod cli_options;

use log::info;
use std::error::Error;
use std::process::ExitCode;

use cli_options::Args;
use mazesolver::draw::Canvas;
use mazesolver::maze::cell::Point;
use mazesolver::maze::generator::Generator;
use mazesolver::maze::grid::Grid;
use mazesolver::maze::solver::Solver;
use mazesolver::saver::SaverMaze;

/// Statistics printed with `--summary`.
#[derive(Debug, Default)]
struct Summary {
    passages: usize,
    generation_duration: f32,
    moves: usize,
    backtracks: usize,
    solving_duration: f32,
    path_length: usize,
    frames: usize,
}

/// Build the maze, either from a file or by generating it, and the canvas to draw it.
fn build_maze(args: &Args, summary: &mut Summary) -> Result<(Grid, Canvas), Box<dyn Error>> {
    if let Some(path) = &args.load {
        let Some(grid) = SaverMaze::new(path.clone()).get_grid()? else {
            return Err(format!("Cannot find the maze file {path:?}").into());
        };
        let mut canvas: Canvas = Canvas::new(&grid, args.frame_delay(), !args.no_animation)?;
        for cell in grid.cells() {
            grid.draw_cell(cell.row, cell.col, &mut canvas)?;
        }
        return Ok((grid, canvas));
    }

    let mut grid: Grid = Grid::new(
        Point::new(args.origin_x.into(), args.origin_y.into()),
        args.rows as usize,
        args.cols as usize,
        args.cell_width.into(),
        args.cell_height.into(),
    )?;
    let mut canvas: Canvas = Canvas::new(&grid, args.frame_delay(), !args.no_animation)?;

    // Entrance and exit
    grid.break_boundary(0, 0)?;
    let (last_row, last_col) = grid.last_cell();
    grid.break_boundary(last_row, last_col)?;

    let mut generator: Generator = Generator::new(args.seed);
    generator.generate(&mut grid, 0, 0, &mut canvas)?;
    summary.passages = generator.iteration;
    summary.generation_duration = generator.duration;

    if let Some(path) = &args.save {
        SaverMaze::new(path.clone()).save_grid(&grid)?;
        info!("Maze saved in {path:?}");
    }
    Ok((grid, canvas))
}

/// Generate or load the maze, then solve it.
///
/// Return whether a path has been found.
fn run(args: &Args) -> Result<bool, Box<dyn Error>> {
    let mut summary: Summary = Summary::default();

    let (mut grid, mut canvas) = build_maze(args, &mut summary)?;

    // The generator leaves all the cells visited
    grid.reset_visited();

    let mut solver: Solver = Solver::new(&grid);
    info!("Searching a path from (0, 0) to {:?}", solver.exit());
    let found: bool = solver.solve(&mut grid, 0, 0, &mut canvas)?;
    summary.moves = solver.moves;
    summary.backtracks = solver.backtracks;
    summary.solving_duration = solver.duration;
    summary.path_length = solver.path().len();
    summary.frames = canvas.frames();

    println!("{}", canvas.picture());
    if found {
        println!("Path found: {} cells", summary.path_length);
    } else {
        println!("No path from the entrance to the exit");
    }
    info!("{summary:?}");

    if args.summary {
        println!(
            "
   passages carved = {}
   generation time = {}s
      solver moves = {}
 solver backtracks = {}
      solving time = {}s
       path length = {}
            frames = {}",
            summary.passages,
            summary.generation_duration,
            summary.moves,
            summary.backtracks,
            summary.solving_duration,
            summary.path_length,
            summary.frames
        );
    }
    Ok(found)
}

fn main() -> ExitCode {
    let args: Args = cli_options::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::ffi::OsStr;

    #[test]
    fn missing_maze_file_is_named_in_the_error() {
        let mut path = std::env::temp_dir();
        path.push(format!("mazesolver-{}-absent.json", std::process::id()));
        let args = Args::try_parse_from([
            OsStr::new("mazesolver"),
            OsStr::new("--load"),
            path.as_os_str(),
        ])
        .unwrap();

        let err = build_maze(&args, &mut Summary::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Cannot find the maze file {path:?}")
        );
        assert!(!err.to_string().contains("Some("));
    }
}
