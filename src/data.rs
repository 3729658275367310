use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapCell {
    Empty,
    Wall,
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}

/// A cell on the board, row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }

    /// Manhattan distance
    pub fn dist(self, other: Pos) -> i32 {
        (self.r - other.r).abs() + (self.c - other.c).abs()
    }

    pub fn euclidean_dist(self, other: Pos) -> f64 {
        let dr = f64::from(self.r - other.r);
        let dc = f64::from(self.c - other.c);
        (dr * dr + dc * dc).sqrt()
    }

    pub(crate) fn neighbors(self) -> [Pos; 4] {
        [
            self + Dir::Up,
            self + Dir::Down,
            self + Dir::Left,
            self + Dir::Right,
        ]
    }

    pub(crate) fn offset(self, dr: i32, dc: i32) -> Pos {
        Pos::new(self.r + dr, self.c + dc)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Order in which successors are generated.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    /// `(Δrow, Δcol)`
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Dir::Up => 'U',
            Dir::Down => 'D',
            Dir::Left => 'L',
            Dir::Right => 'R',
        }
    }

    pub fn from_letter(c: char) -> Option<Dir> {
        match c.to_ascii_uppercase() {
            'U' => Some(Dir::Up),
            'D' => Some(Dir::Down),
            'L' => Some(Dir::Left),
            'R' => Some(Dir::Right),
            _ => None,
        }
    }

    pub(crate) fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.delta();
        self.offset(dr, dc)
    }
}

impl Sub<Dir> for Pos {
    type Output = Pos;

    fn sub(self, dir: Dir) -> Pos {
        self + dir.inverse()
    }
}

/// For a neighboring box in the given direction, the two pairs of cells
/// (one beside each box, on the same side) which, when both are walls,
/// freeze both boxes in place.
///
/// Indexed by `Dir as usize`, offsets are relative to the pushed box.
pub(crate) const FREEZE_OFFSETS: [[[(i32, i32); 2]; 2]; 4] = [
    // neighbor above - walls both left or both right
    [[(0, -1), (-1, -1)], [(0, 1), (-1, 1)]],
    // neighbor below
    [[(0, -1), (1, -1)], [(0, 1), (1, 1)]],
    // neighbor left - walls both above or both below
    [[(-1, 0), (-1, -1)], [(1, 0), (1, -1)]],
    // neighbor right
    [[(-1, 0), (-1, 1)], [(1, 0), (1, 1)]],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_match_deltas() {
        let p = Pos::new(5, 5);
        assert_eq!(p + Dir::Up, Pos::new(4, 5));
        assert_eq!(p + Dir::Down, Pos::new(6, 5));
        assert_eq!(p + Dir::Left, Pos::new(5, 4));
        assert_eq!(p + Dir::Right, Pos::new(5, 6));
        for &dir in &DIRECTIONS {
            assert_eq!(p + dir - dir, p);
            assert_eq!(Dir::from_letter(dir.letter()), Some(dir));
        }
    }

    #[test]
    fn freeze_offsets_are_perpendicular_to_neighbor() {
        for &dir in &DIRECTIONS {
            let (dr, dc) = dir.delta();
            for pair in &FREEZE_OFFSETS[dir as usize] {
                let beside = pair[0];
                let diagonal = pair[1];
                // beside the pushed box, perpendicular to the neighbor direction
                assert_eq!(beside.0 * dr + beside.1 * dc, 0);
                // beside the neighbor box on the same side
                assert_eq!((beside.0 + dr, beside.1 + dc), diagonal);
            }
        }
    }

    #[test]
    fn distances() {
        let a = Pos::new(1, 1);
        let b = Pos::new(4, 5);
        assert_eq!(a.dist(b), 7);
        assert!((a.euclidean_dist(b) - 5.0).abs() < 1e-9);
    }
}
