// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
#![warn(clippy::all)]

#[macro_use]
extern crate log;

pub mod config;
pub mod data;
pub mod level;
pub mod map;
pub mod map_formatter;
pub mod moves;
pub mod parser;
pub mod report;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod fs;
mod vec2d;

use std::error::Error;
use std::path::Path;

use crate::config::{Method, SearchConfig};
use crate::level::{Level, Puzzle, PuzzleErr};
use crate::solver::SearchResult;

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

impl<P: AsRef<Path> + ?Sized> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let level: Level = fs::read_file(self)?.parse()?;
        Ok(level)
    }
}

pub trait Solve {
    fn solve(&self, method: Method, config: &SearchConfig) -> SearchResult;
}

/// Validates an already parsed puzzle and runs one search on it.
pub fn solve_puzzle(
    puzzle: &Puzzle,
    method: Method,
    config: &SearchConfig,
) -> Result<SearchResult, PuzzleErr> {
    let level = Level::new(puzzle)?;
    Ok(level.solve(method, config))
}
