pub(crate) mod backtracking;
pub mod best_first;
pub mod deadlock;
pub mod expand;
pub mod heuristics;
pub mod iddfs;
pub(crate) mod preprocessing;
pub mod stats;
pub mod uninformed;

use std::fmt::{self, Debug, Display, Formatter};
use std::time::{Duration, Instant};

use crate::config::{Method, SearchConfig};
use crate::level::Level;
use crate::moves::Moves;
use crate::Solve;

use self::stats::Stats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Moves),
    NoSolution,
    /// Stopped after expanding `SearchConfig::node_budget` states,
    /// solvability is unknown.
    BudgetExceeded,
}

#[derive(Clone)]
pub struct SearchResult {
    pub outcome: Outcome,
    pub stats: Stats,
    pub elapsed: Duration,
    pub method: Method,
}

impl SearchResult {
    pub fn moves(&self) -> Option<&Moves> {
        match self.outcome {
            Outcome::Solved(ref moves) => Some(moves),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.moves().is_some()
    }

    /// `"solved"`, `"no solution"` or `"budget exceeded"`
    pub fn result_str(&self) -> &'static str {
        match self.outcome {
            Outcome::Solved(_) => "solved",
            Outcome::NoSolution => "no solution",
            Outcome::BudgetExceeded => "budget exceeded",
        }
    }

    pub fn cost(&self) -> Option<usize> {
        self.moves().map(Moves::move_cnt)
    }

    pub fn expanded_nodes_qty(&self) -> usize {
        self.stats.total_expanded()
    }

    /// Peak frontier size.
    pub fn frontier_nodes_qty(&self) -> usize {
        self.stats.max_frontier()
    }

    /// Direction letters, empty when not solved.
    pub fn solution(&self) -> String {
        self.moves().map(ToString::to_string).unwrap_or_default()
    }

    /// Seconds
    pub fn duration(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl Debug for SearchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.method, self.result_str())?;
        if let Some(moves) = self.moves() {
            writeln!(f, "{}", moves)?;
            writeln!(f, "Moves: {}", moves.move_cnt())?;
            writeln!(f, "Pushes: {}", moves.push_cnt())?;
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves() {
            Some(moves) => {
                writeln!(f, "Found solution using {}: {}", self.method, moves)?;
                writeln!(f, "Moves: {}", moves.move_cnt())?;
                writeln!(f, "Pushes: {}", moves.push_cnt())?;
            }
            None => writeln!(f, "{} using {}", self.result_str(), self.method)?,
        }
        writeln!(f, "Duration: {:.6} s", self.duration())?;
        write!(f, "{}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, method: Method, config: &SearchConfig) -> SearchResult {
        solve(self, method, config)
    }
}

fn solve(level: &Level, method: Method, config: &SearchConfig) -> SearchResult {
    debug!("Search called: {}, {:?}", method, config);

    let started = Instant::now();
    let (outcome, stats) = match method {
        Method::BreadthFirst => uninformed::breadth_first(level, config),
        Method::DepthFirst => uninformed::depth_first(level, config),
        Method::IterativeDeepening => iddfs::iterative_deepening(level, config),
        Method::Greedy(heuristic) => best_first::greedy(level, config, heuristic),
        Method::AStar(heuristic) => best_first::a_star(level, config, heuristic),
    };
    let elapsed = started.elapsed();

    debug!(
        "Search done: {:?} after expanding {} states",
        outcome,
        stats.total_expanded()
    );

    SearchResult {
        outcome,
        stats,
        elapsed,
        method,
    }
}

/// Counts down expansions when `SearchConfig::node_budget` is set.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Budget {
    remaining: Option<usize>,
}

impl Budget {
    pub(crate) fn new(config: &SearchConfig) -> Self {
        Budget {
            remaining: config.node_budget,
        }
    }

    /// Returns false once the budget is used up.
    pub(crate) fn spend(&mut self) -> bool {
        match self.remaining {
            None => true,
            Some(0) => false,
            Some(ref mut n) => {
                *n -= 1;
                true
            }
        }
    }
}
