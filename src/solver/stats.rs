use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

/// Search effort, counted per depth (distance from the initial state).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    expanded_states: Vec<usize>,
    duplicate_states: Vec<usize>,
    max_frontier: usize,
    final_frontier: usize,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    /// Expanded nodes - removed from the frontier, marked visited and their successors generated.
    ///
    /// Iterative deepening counts re-expansions in every iteration.
    pub fn total_expanded(&self) -> usize {
        self.expanded_states.iter().sum()
    }

    /// States popped from the frontier after they had already been expanded.
    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    /// Largest number of discovered but not yet expanded states at any point.
    pub fn max_frontier(&self) -> usize {
        self.max_frontier
    }

    /// Frontier size when the search ended.
    pub fn final_frontier(&self) -> usize {
        self.final_frontier
    }

    /// Returns true if this is the first state at this depth.
    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    /// Returns true if this is the first state at this depth.
    pub(crate) fn add_expanded(&mut self, depth: usize) -> bool {
        Self::add(&mut self.expanded_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    pub(crate) fn update_frontier(&mut self, len: usize) {
        self.max_frontier = self.max_frontier.max(len);
        self.final_frontier = len;
    }

    fn add(counts: &mut Vec<usize>, depth: usize) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

// separator doesn't cover usize
fn sep(n: usize) -> String {
    (n as u64).separated_string()
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "total created: {}", sep(self.total_created()))?;
        writeln!(f, "total reached duplicates: {}", sep(self.total_reached_duplicates()))?;
        writeln!(f, "total expanded: {}", sep(self.total_expanded()))?;
        writeln!(f, "max frontier: {}", sep(self.max_frontier))
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created total: {}", sep(self.total_created()))?;
        writeln!(f, "Expanded total: {}", sep(self.total_expanded()))?;
        writeln!(f, "Reached duplicates total: {}", sep(self.total_reached_duplicates()))?;
        writeln!(f, "Max frontier: {}", sep(self.max_frontier))?;
        writeln!(f, "Frontier at the end: {}", sep(self.final_frontier))?;
        writeln!(f)?;

        writeln!(f, "{:<15}{:<15}{:<15}{:<15}", "Depth", "Created", "Expanded", "Duplicates")?;
        let depths = self
            .created_states
            .len()
            .max(self.expanded_states.len())
            .max(self.duplicate_states.len());
        let at = |counts: &Vec<usize>, i: usize| counts.get(i).cloned().unwrap_or(0);
        for i in 0..depths {
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}",
                format!("{}:", i),
                sep(at(&self.created_states, i)),
                sep(at(&self.expanded_states, i)),
                sep(at(&self.duplicate_states, i)),
            )?;
        }
        Ok(())
    }
}
