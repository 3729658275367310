use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Dir, Pos};
use crate::map::Board;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::solver::expand;
use crate::solver::preprocessing;
use crate::state::State;

/// Already parsed but not yet validated puzzle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Puzzle {
    pub walls: Vec<Pos>,
    pub goals: Vec<Pos>,
    pub player: Option<Pos>,
    pub boxes: Vec<Pos>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleErr {
    NoPlayer,
    NegativePos(Pos),
    GoalOnWall(Pos),
    PlayerOnWall,
    BoxOnWall(Pos),
    PlayerOnBox,
    DuplicateBox(Pos),
    BoxesGoals { boxes: usize, goals: usize },
    IncompleteBorder,
}

impl Display for PuzzleErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            PuzzleErr::NoPlayer => write!(f, "Invalid puzzle: no player"),
            PuzzleErr::NegativePos(pos) => write!(f, "Invalid puzzle: negative position {}", pos),
            PuzzleErr::GoalOnWall(pos) => write!(f, "Invalid puzzle: goal on wall at {}", pos),
            PuzzleErr::PlayerOnWall => write!(f, "Invalid puzzle: player on wall"),
            PuzzleErr::BoxOnWall(pos) => write!(f, "Invalid puzzle: box on wall at {}", pos),
            PuzzleErr::PlayerOnBox => write!(f, "Invalid puzzle: player on box"),
            PuzzleErr::DuplicateBox(pos) => {
                write!(f, "Invalid puzzle: more than one box at {}", pos)
            }
            PuzzleErr::BoxesGoals { boxes, goals } => write!(
                f,
                "Invalid puzzle: different number of boxes ({}) and goals ({})",
                boxes, goals
            ),
            PuzzleErr::IncompleteBorder => write!(
                f,
                "Invalid puzzle: player can exit the level because of missing border"
            ),
        }
    }
}

impl Error for PuzzleErr {}

/// A validated puzzle: the board and the initial state.
#[derive(Clone)]
pub struct Level {
    pub map: Board,
    pub state: State,
}

impl Level {
    pub fn new(puzzle: &Puzzle) -> Result<Self, PuzzleErr> {
        let player = puzzle.player.ok_or(PuzzleErr::NoPlayer)?;

        let all_cells = || {
            puzzle
                .walls
                .iter()
                .chain(&puzzle.goals)
                .chain(&puzzle.boxes)
                .chain(Some(&player))
        };
        if let Some(&pos) = all_cells().find(|p| p.r < 0 || p.c < 0) {
            return Err(PuzzleErr::NegativePos(pos));
        }
        let rows = all_cells().map(|p| p.r as usize + 1).max().unwrap_or(0);
        let cols = all_cells().map(|p| p.c as usize + 1).max().unwrap_or(0);

        let mut goals = puzzle.goals.clone();
        goals.sort();
        goals.dedup();
        let mut boxes = puzzle.boxes.clone();
        boxes.sort();

        let map = Board::new(&puzzle.walls, &goals, rows, cols);
        for &goal in &goals {
            if puzzle.walls.contains(&goal) {
                return Err(PuzzleErr::GoalOnWall(goal));
            }
        }
        if map.is_wall(player) {
            return Err(PuzzleErr::PlayerOnWall);
        }
        for (i, &b) in boxes.iter().enumerate() {
            if map.is_wall(b) {
                return Err(PuzzleErr::BoxOnWall(b));
            }
            if i > 0 && boxes[i - 1] == b {
                return Err(PuzzleErr::DuplicateBox(b));
            }
        }
        if boxes.binary_search(&player).is_ok() {
            return Err(PuzzleErr::PlayerOnBox);
        }
        if boxes.len() != goals.len() {
            return Err(PuzzleErr::BoxesGoals {
                boxes: boxes.len(),
                goals: goals.len(),
            });
        }

        let state = State::new(player, boxes);
        preprocessing::check_enclosure(&map, &state)?;

        Ok(Level { map, state })
    }

    /// Applies the moves one by one using the plain move rules (no deadlock pruning).
    ///
    /// Returns all states including the initial one
    /// or `None` if any of the moves is not possible.
    pub fn replay<I: IntoIterator<Item = Dir>>(&self, dirs: I) -> Option<Vec<State>> {
        let mut states = vec![self.state.clone()];
        for dir in dirs {
            let last = states.last()?;
            let (next, _) = expand::try_move(&self.map, last, dir)?;
            states.push(next);
        }
        Some(states)
    }

    pub fn format_solution<'a>(
        &'a self,
        moves: &'a Moves,
        include_steps: bool,
    ) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.map, &self.state, moves, include_steps)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.map.xsb_with_state(&self.state))
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
