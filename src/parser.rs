use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::Pos;
use crate::level::{Level, Puzzle, PuzzleErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    MultiplePlayers,
    Puzzle(PuzzleErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::Puzzle(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<PuzzleErr> for ParserErr {
    fn from(err: PuzzleErr) -> Self {
        ParserErr::Puzzle(err)
    }
}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let puzzle = parse_xsb(s)?;
        Ok(Level::new(&puzzle)?)
    }
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
pub fn parse_xsb(level: &str) -> Result<Puzzle, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    let mut puzzle = Puzzle::default();

    for (r, line) in level.lines().enumerate() {
        for (c, cur_char) in line.trim_end_matches('\r').chars().enumerate() {
            let pos = Pos::new(r as i32, c as i32);

            let (player, has_box, goal) = match cur_char {
                '#' => {
                    puzzle.walls.push(pos);
                    continue;
                }
                'p' | '@' => (true, false, false),
                'P' | '+' => (true, false, true),
                'b' | '$' => (false, true, false),
                'B' | '*' => (false, true, true),
                '.' => (false, false, true),
                ' ' | '-' | '_' => continue,
                _ => return Err(ParserErr::Pos(r, c)),
            };
            if player {
                if puzzle.player.is_some() {
                    return Err(ParserErr::MultiplePlayers);
                }
                puzzle.player = Some(pos);
            }
            if has_box {
                puzzle.boxes.push(pos);
            }
            if goal {
                puzzle.goals.push(pos);
            }
        }
    }

    Ok(puzzle)
}
