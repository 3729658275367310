//! Iterative deepening depth-first search.
//!
//! Each iteration is a depth-limited DFS from scratch with the limit one higher than before.
//! Within an iteration a state is expanded again only if it's reached at a smaller depth
//! than before, so the first solution found has the fewest moves.

use fnv::FnvHashMap;
use typed_arena::Arena;

use crate::config::SearchConfig;
use crate::level::Level;
use crate::map::Board;
use crate::solver::backtracking::{self, CameFrom};
use crate::solver::expand::expand_move;
use crate::solver::stats::Stats;
use crate::solver::{Budget, Outcome};
use crate::state::State;

const FIRST_LIMIT: usize = 1;
const LIMIT_STEP: usize = 1;

enum Visit<'a> {
    Found(&'a State),
    NotFound,
    OutOfBudget,
}

struct DepthLimited<'a, 's> {
    map: &'a Board,
    arena: &'a Arena<State>,
    limit: usize,
    came_from: CameFrom<'a>,
    /// Smallest depth each state was expanded at in this iteration.
    expanded_at: FnvHashMap<&'a State, usize>,
    /// Some state at the limit had successors which weren't explored.
    cut_off: bool,
    stats: &'s mut Stats,
    budget: &'s mut Budget,
}

impl<'a, 's> DepthLimited<'a, 's> {
    fn visit(&mut self, cur: &'a State, depth: usize) -> Visit<'a> {
        if !self.budget.spend() {
            return Visit::OutOfBudget;
        }
        self.expanded_at.insert(cur, depth);
        if self.stats.add_expanded(depth) {
            trace!("Expanding depth {}", depth);
        }

        if cur.is_solved(self.map) {
            return Visit::Found(cur);
        }
        if depth == self.limit {
            self.cut_off = true;
            return Visit::NotFound;
        }

        for (dir, new_state) in expand_move(self.map, cur) {
            let new_depth = depth + 1;
            match self.expanded_at.get(&new_state) {
                Some(&d) if d <= new_depth => {
                    self.stats.add_reached_duplicate(new_depth);
                    continue;
                }
                _ => {}
            }

            let new_state: &'a State = match self.came_from.get_key_value(&new_state) {
                Some((&known, _)) => known,
                None => {
                    self.stats.add_created(new_depth);
                    self.arena.alloc(new_state)
                }
            };
            // overwrite - this path is shorter than the last one that reached it
            self.came_from.insert(new_state, Some((cur, dir)));

            match self.visit(new_state, new_depth) {
                Visit::NotFound => {}
                found_or_out => return found_or_out,
            }
        }

        Visit::NotFound
    }

    /// Discovered but not expanded in this iteration.
    fn frontier_size(&self) -> usize {
        self.came_from.len() - self.expanded_at.len()
    }
}

pub fn iterative_deepening(level: &Level, config: &SearchConfig) -> (Outcome, Stats) {
    let mut stats = Stats::new();
    let mut budget = Budget::new(config);

    let mut limit = FIRST_LIMIT;
    loop {
        info!("Depth limit {}", limit);

        // fresh every iteration, only the stats are cumulative
        let arena = Arena::new();
        let start: &State = arena.alloc(level.state.clone());
        let mut search = DepthLimited {
            map: &level.map,
            arena: &arena,
            limit,
            came_from: CameFrom::default(),
            expanded_at: FnvHashMap::default(),
            cut_off: false,
            stats: &mut stats,
            budget: &mut budget,
        };
        search.came_from.insert(start, None);
        search.stats.add_created(0);

        let visit = search.visit(start, 0);
        let frontier = search.frontier_size();
        let cut_off = search.cut_off;
        let outcome = match visit {
            Visit::Found(goal) => {
                debug!("Solved with limit {}, backtracking path", limit);
                Some(Outcome::Solved(backtracking::reconstruct_moves(
                    &search.came_from,
                    goal,
                )))
            }
            Visit::OutOfBudget => Some(Outcome::BudgetExceeded),
            Visit::NotFound if !cut_off => Some(Outcome::NoSolution),
            Visit::NotFound => None,
        };

        stats.update_frontier(frontier);
        if let Some(outcome) = outcome {
            return (outcome, stats);
        }
        limit += LIMIT_STEP;
    }
}
