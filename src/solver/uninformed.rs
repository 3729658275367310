//! Breadth-first and depth-first search.
//!
//! Both are the same graph traversal, they only differ in the order in which
//! the frontier hands out discovered states.

use std::collections::VecDeque;

use fnv::FnvHashSet;
use typed_arena::Arena;

use crate::config::SearchConfig;
use crate::level::Level;
use crate::solver::backtracking::{self, CameFrom};
use crate::solver::expand::expand_move;
use crate::solver::stats::Stats;
use crate::solver::{Budget, Outcome};
use crate::state::State;

pub(crate) trait Frontier<T> {
    fn add(&mut self, item: T);
    fn next(&mut self) -> Option<T>;
    fn size(&self) -> usize;
}

/// FIFO - shallowest first
impl<T> Frontier<T> for VecDeque<T> {
    fn add(&mut self, item: T) {
        self.push_back(item);
    }

    fn next(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// LIFO - deepest first
impl<T> Frontier<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }

    fn next(&mut self) -> Option<T> {
        self.pop()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// Finds a solution with the fewest moves.
pub fn breadth_first(level: &Level, config: &SearchConfig) -> (Outcome, Stats) {
    let arena = Arena::new();
    traverse(level, config, &arena, VecDeque::new())
}

/// Usually finds long solutions, they're only valid, not short.
pub fn depth_first(level: &Level, config: &SearchConfig) -> (Outcome, Stats) {
    let arena = Arena::new();
    traverse(level, config, &arena, Vec::new())
}

fn traverse<'a, F>(
    level: &Level,
    config: &SearchConfig,
    arena: &'a Arena<State>,
    mut frontier: F,
) -> (Outcome, Stats)
where
    F: Frontier<(&'a State, usize)>,
{
    let mut stats = Stats::new();
    let mut budget = Budget::new(config);
    let mut came_from = CameFrom::default();
    let mut visited = FnvHashSet::default();

    let start: &State = arena.alloc(level.state.clone());
    came_from.insert(start, None);
    stats.add_created(0);
    frontier.add((start, 0));
    stats.update_frontier(frontier.size());

    while let Some((cur, depth)) = frontier.next() {
        if visited.contains(cur) {
            stats.add_reached_duplicate(depth);
            continue;
        }
        if !budget.spend() {
            // the popped state was never expanded so it still counts
            stats.update_frontier(frontier.size() + 1);
            return (Outcome::BudgetExceeded, stats);
        }

        visited.insert(cur);
        if stats.add_expanded(depth) {
            info!("Expanding depth {}", depth);
        }

        if cur.is_solved(&level.map) {
            debug!("Solved, backtracking path");
            stats.update_frontier(frontier.size());
            let moves = backtracking::reconstruct_moves(&came_from, cur);
            return (Outcome::Solved(moves), stats);
        }

        for (dir, new_state) in expand_move(&level.map, cur) {
            if came_from.contains_key(&new_state) {
                stats.add_reached_duplicate(depth + 1);
                continue;
            }
            let new_state: &State = arena.alloc(new_state);
            came_from.insert(new_state, Some((cur, dir)));
            stats.add_created(depth + 1);
            frontier.add((new_state, depth + 1));
        }
        stats.update_frontier(frontier.size());
    }

    stats.update_frontier(0);
    (Outcome::NoSolution, stats)
}
