//! Greedy best-first search and A*, both on top of one priority queue search.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use fnv::FnvHashSet;
use typed_arena::Arena;

use crate::config::{Heuristic, SearchConfig};
use crate::level::Level;
use crate::solver::backtracking::{self, CameFrom};
use crate::solver::expand::expand_move;
use crate::solver::heuristics;
use crate::solver::stats::Stats;
use crate::solver::{Budget, Outcome};
use crate::state::State;

/// Heuristics are real numbers (euclidean) and can be infinite (deadlocks).
/// `total_cmp` gives them the total order the heap needs.
#[derive(Debug, Clone, Copy)]
struct Priority(f64);

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug)]
struct SearchNode<'a> {
    state: &'a State,
    /// Moves from the initial state.
    dist: usize,
    priority: Priority,
    /// Insertion order, breaks ties so equal priorities pop first in first out.
    counter: u64,
}

impl<'a> SearchNode<'a> {
    fn key(&self) -> (Priority, u64) {
        (self.priority, self.counter)
    }
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for SearchNode<'_> {}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, wrapped in Reverse it pops the lowest key
        self.key().cmp(&other.key())
    }
}

/// Expands states in order of `priority(state, dist)`, lowest first.
///
/// A state is queued only when first discovered. States with infinite priority
/// are recorded as discovered but never queued.
pub fn best_first<P>(level: &Level, config: &SearchConfig, priority: P) -> (Outcome, Stats)
where
    P: Fn(&State, usize) -> f64,
{
    let arena = Arena::new();

    let mut stats = Stats::new();
    let mut budget = Budget::new(config);
    let mut came_from = CameFrom::default();
    let mut visited = FnvHashSet::default();
    let mut to_visit = BinaryHeap::new();
    let mut counter = 0;

    let start: &State = arena.alloc(level.state.clone());
    came_from.insert(start, None);
    stats.add_created(0);
    to_visit.push(Reverse(SearchNode {
        state: start,
        dist: 0,
        priority: Priority(priority(start, 0)),
        counter,
    }));
    stats.update_frontier(to_visit.len());

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        let cur = cur_node.state;
        if visited.contains(cur) {
            stats.add_reached_duplicate(cur_node.dist);
            continue;
        }
        if !budget.spend() {
            stats.update_frontier(to_visit.len() + 1);
            return (Outcome::BudgetExceeded, stats);
        }

        visited.insert(cur);
        if stats.add_expanded(cur_node.dist) {
            info!("Expanding depth {}", cur_node.dist);
        }

        if cur.is_solved(&level.map) {
            debug!("Solved, backtracking path");
            stats.update_frontier(to_visit.len());
            let moves = backtracking::reconstruct_moves(&came_from, cur);
            return (Outcome::Solved(moves), stats);
        }

        let new_dist = cur_node.dist + 1;
        for (dir, new_state) in expand_move(&level.map, cur) {
            if came_from.contains_key(&new_state) {
                stats.add_reached_duplicate(new_dist);
                continue;
            }
            let new_state: &State = arena.alloc(new_state);
            came_from.insert(new_state, Some((cur, dir)));
            stats.add_created(new_dist);

            let p = priority(new_state, new_dist);
            if p.is_infinite() {
                trace!("Not queueing deadlocked state");
                continue;
            }
            counter += 1;
            to_visit.push(Reverse(SearchNode {
                state: new_state,
                dist: new_dist,
                priority: Priority(p),
                counter,
            }));
        }
        stats.update_frontier(to_visit.len());
    }

    stats.update_frontier(0);
    (Outcome::NoSolution, stats)
}

/// Priority is the heuristic alone.
pub fn greedy(level: &Level, config: &SearchConfig, heuristic: Heuristic) -> (Outcome, Stats) {
    let check_deadlocks = config.heuristic_deadlocks;
    best_first(level, config, |state, _| {
        heuristics::estimate(&level.map, state, heuristic, check_deadlocks)
    })
}

/// Priority is distance plus heuristic.
/// Finds a solution with the fewest moves when the heuristic never overestimates.
pub fn a_star(level: &Level, config: &SearchConfig, heuristic: Heuristic) -> (Outcome, Stats) {
    let check_deadlocks = config.heuristic_deadlocks;
    best_first(level, config, |state, dist| {
        dist as f64 + heuristics::estimate(&level.map, state, heuristic, check_deadlocks)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::uninformed::breadth_first;

    fn level(s: &str) -> Level {
        s.parse().unwrap()
    }

    fn solved(outcome: Outcome) -> crate::moves::Moves {
        match outcome {
            Outcome::Solved(moves) => moves,
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn node_order() {
        let state = State::new(crate::data::Pos::new(1, 1), vec![]);
        let node = |priority, counter| {
            Reverse(SearchNode {
                state: &state,
                dist: 0,
                priority: Priority(priority),
                counter,
            })
        };

        let mut heap = BinaryHeap::new();
        heap.push(node(2.0, 0));
        heap.push(node(1.5, 1));
        heap.push(node(1.5, 2));
        heap.push(node(f64::INFINITY, 3));
        heap.push(node(0.5, 4));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|Reverse(n)| n.counter)
            .collect();
        assert_eq!(order, vec![4, 1, 2, 0, 3]);
    }

    #[test]
    fn a_star_matches_bfs() {
        let level = level(
            r"
#####
#@  #
# $ #
#  .#
#####
",
        );
        let bfs = solved(breadth_first(&level, &SearchConfig::default()).0);
        for &h in &[Heuristic::Manhattan, Heuristic::Euclidean, Heuristic::LinearConflict] {
            let (outcome, stats) = a_star(&level, &SearchConfig::default(), h);
            let moves = solved(outcome);
            assert_eq!(moves.move_cnt(), bfs.move_cnt());
            // 4 box positions which aren't deadlocks times 8 player positions
            assert!(stats.total_expanded() <= 32);
        }
    }

    #[test]
    fn greedy_finds_valid_solution() {
        let level = level(
            r"
######
#@   #
# $$ #
#  ..#
######
",
        );
        let bfs = solved(breadth_first(&level, &SearchConfig::default()).0);
        for &h in &Heuristic::ALL {
            let moves = solved(greedy(&level, &SearchConfig::default(), h).0);
            assert!(moves.move_cnt() >= bfs.move_cnt());
            let states = level.replay(moves.dirs()).unwrap();
            assert!(states.last().unwrap().is_solved(&level.map));
        }
    }

    #[test]
    fn infinite_priority_is_not_queued() {
        let level = level("#####\n#@$.#\n#####\n");
        let (outcome, stats) = best_first(&level, &SearchConfig::default(), |_, dist| {
            if dist == 0 {
                0.0
            } else {
                f64::INFINITY
            }
        });
        assert_eq!(outcome, Outcome::NoSolution);
        assert_eq!(stats.total_expanded(), 1);
        assert_eq!(stats.total_created(), 2);
    }

    #[test]
    fn deterministic() {
        let level = level(
            r"
######
#@   #
# $$ #
#  ..#
######
",
        );
        let config = SearchConfig {
            heuristic_deadlocks: true,
            ..SearchConfig::default()
        };
        let (first, first_stats) = greedy(&level, &config, Heuristic::ManhattanPlusPlayer);
        let (second, second_stats) = greedy(&level, &config, Heuristic::ManhattanPlusPlayer);
        assert_eq!(first, second);
        assert_eq!(first_stats, second_stats);
    }
}
