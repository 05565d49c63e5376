/*
saver.rs

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

//! Save and restore a maze layout.
//!
//! The saved object is a serialization of the [`Grid`] object in JSON format by using [`serde`].
//! The visited flags are not saved. A restored grid is verified before it is returned, so that a
//! hand-edited file cannot break the wall symmetry that the solver relies on.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::maze::grid::Grid;

/// Object to save and restore a maze.
pub struct SaverMaze {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverMaze {
    /// Create a [`SaverMaze`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Maze file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the [`Grid`] object from the save file.
    ///
    /// Return the [`Grid`] object or None if the file does not exist.
    pub fn get_grid(&self) -> Result<Option<Grid>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let grid: Grid = serde_json::from_reader(reader)?;
        grid.validate()?;
        debug!("Maze {}x{} loaded", grid.rows(), grid.cols());
        Ok(Some(grid))
    }

    /// Save the provided [`Grid`] object.
    pub fn save_grid(&self, grid: &Grid) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, grid)?;
        writer.flush()?;
        debug!("Maze {}x{} saved", grid.rows(), grid.cols());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::cell::Point;
    use crate::maze::generator::Generator;
    use crate::maze::render::NoRender;
    use crate::maze::walls::Walls;
    use std::env;
    use std::fs;

    fn temp_file(name: &str) -> PathBuf {
        let mut path: PathBuf = env::temp_dir();
        path.push(format!("mazesolver-{}-{name}.json", std::process::id()));
        path
    }

    #[test]
    fn saved_maze_is_restored() {
        let mut grid = Grid::new(Point::new(1.0, 2.0), 6, 9, 4.0, 2.0).unwrap();
        grid.break_boundary(0, 0).unwrap();
        grid.break_boundary(5, 8).unwrap();
        Generator::new(Some(31))
            .generate(&mut grid, 0, 0, &mut NoRender)
            .unwrap();

        let path = temp_file("restore");
        let saver = SaverMaze::new(path.clone());
        saver.save_grid(&grid).unwrap();
        let restored = saver.get_grid().unwrap().expect("file exists");
        fs::remove_file(&path).unwrap();

        assert_eq!((restored.rows(), restored.cols()), (6, 9));
        assert_eq!(restored.origin(), Point::new(1.0, 2.0));
        let layout = |g: &Grid| -> Vec<(usize, usize, Walls)> {
            g.cells().map(|c| (c.row, c.col, c.walls)).collect()
        };
        assert_eq!(layout(&grid), layout(&restored));
        // Visited flags are not saved
        assert!(restored.cells().all(|c| !c.visited));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let saver = SaverMaze::new(temp_file("missing"));
        assert!(saver.get_grid().unwrap().is_none());
    }

    #[test]
    fn one_sided_wall_is_rejected() {
        let mut grid = Grid::new(Point::default(), 2, 2, 1.0, 1.0).unwrap();
        grid.cell_at_mut(1, 1).unwrap().walls.remove(Walls::TOP);

        let path = temp_file("asymmetric");
        let saver = SaverMaze::new(path.clone());
        saver.save_grid(&grid).unwrap();
        let res = saver.get_grid();
        fs::remove_file(&path).unwrap();
        assert!(res.is_err());
    }

    #[test]
    fn negative_cell_size_is_rejected() {
        let grid = Grid::new(Point::default(), 2, 2, -4.0, 2.0).unwrap();

        let path = temp_file("negative");
        let saver = SaverMaze::new(path.clone());
        saver.save_grid(&grid).unwrap();
        let res = saver.get_grid();
        fs::remove_file(&path).unwrap();
        assert!(res.is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let path = temp_file("garbage");
        fs::write(&path, "{\"rows\": 3}").unwrap();
        let res = SaverMaze::new(path.clone()).get_grid();
        fs::remove_file(&path).unwrap();
        assert!(res.is_err());
    }
}
