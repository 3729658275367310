use std::fmt::{self, Debug, Display, Formatter};

use crate::map::Board;
use crate::moves::Moves;
use crate::solver::expand;
use crate::state::State;

/// Renders the initial state and then the board after every push
/// (or after every move with `include_steps`).
pub struct SolutionFormatter<'a> {
    map: &'a Board,
    initial_state: &'a State,
    moves: &'a Moves,
    include_steps: bool,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(
        map: &'a Board,
        initial_state: &'a State,
        moves: &'a Moves,
        include_steps: bool,
    ) -> Self {
        Self {
            map,
            initial_state,
            moves,
            include_steps,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.map.xsb_with_state(self.initial_state))?;

        let mut last_state = self.initial_state.clone();
        for (i, mov) in self.moves.iter().enumerate() {
            let (new_state, is_push) = match expand::try_move(self.map, &last_state, mov.dir) {
                Some(next) => next,
                None => {
                    // moves from a different level
                    writeln!(f, "Move {} ({}) is not possible", i + 1, mov.dir)?;
                    return Ok(());
                }
            };
            if is_push || self.include_steps {
                writeln!(f, "{}", self.map.xsb_with_state(&new_state))?;
            }
            last_state = new_state;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
