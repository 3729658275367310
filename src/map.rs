use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

/// Walls and goals of one puzzle. Immutable for the lifetime of a search.
#[derive(Clone)]
pub struct Board {
    pub(crate) grid: Vec2d<MapCell>,
    pub(crate) goals: Vec<Pos>,
    /// Extreme wall coordinates over the whole board, `(min, max)`.
    wall_rows: (i32, i32),
    wall_cols: (i32, i32),
}

impl Board {
    /// Caller guarantees all positions are non-negative, inside `rows` x `cols`
    /// and that walls and goals are disjoint.
    pub(crate) fn new(walls: &[Pos], goals: &[Pos], rows: usize, cols: usize) -> Self {
        let mut grid = Vec2d::new(rows, cols, MapCell::Empty);
        for &w in walls {
            grid[w] = MapCell::Wall;
        }
        for &g in goals {
            grid[g] = MapCell::Goal;
        }

        let mut goals = goals.to_vec();
        goals.sort();
        goals.dedup();

        let wall_rows = min_max(walls.iter().map(|p| p.r)).unwrap_or((0, rows as i32 - 1));
        let wall_cols = min_max(walls.iter().map(|p| p.c)).unwrap_or((0, cols as i32 - 1));

        Board {
            grid,
            goals,
            wall_rows,
            wall_cols,
        }
    }

    /// Cells outside the grid are floor - nothing can ever stand there on a validated level
    /// so this only matters to deadlock checks which then simply don't fire.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Wall)
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Goal)
    }

    /// Sorted goal positions.
    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    pub(crate) fn wall_rows(&self) -> (i32, i32) {
        self.wall_rows
    }

    pub(crate) fn wall_cols(&self) -> (i32, i32) {
        self.wall_cols
    }

    pub fn xsb_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(&self.grid, Some(state))
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        MapFormatter::new(&self.grid, None)
    }
}

fn min_max<I: Iterator<Item = i32>>(iter: I) -> Option<(i32, i32)> {
    iter.fold(None, |acc, x| match acc {
        None => Some((x, x)),
        Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
    })
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    use super::*;

    #[test]
    fn formatting_map() {
        let xsb_level = r"
*###*
#@$.#
*###*#
"
        .trim_start_matches('\n');
        let xsb_map = r"
.###.
#  .#
.###.#
"
        .trim_start_matches('\n');

        let level: Level = xsb_level.parse().unwrap();
        assert_eq!(format!("{}", level.map), xsb_map);
        assert_eq!(format!("{:?}", level.map), xsb_map);
    }

    #[test]
    fn wall_bounds() {
        let level: Level = r"
  ####
###  #
#@$ .#
######
"
        .parse()
        .unwrap();
        assert_eq!(level.map.wall_rows(), (0, 3));
        assert_eq!(level.map.wall_cols(), (0, 5));
        assert!(level.map.is_wall(Pos::new(0, 2)));
        assert!(!level.map.is_wall(Pos::new(0, 0)));
        assert!(!level.map.is_wall(Pos::new(-1, 0)));
        assert!(level.map.is_goal(Pos::new(2, 4)));
        assert_eq!(level.map.goals(), &[Pos::new(2, 4)]);
    }
}
