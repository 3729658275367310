//! Cheap checks whether a box which was just pushed can never reach a goal.
//!
//! All checks are sufficient, not complete: a state they accept can still be unsolvable
//! (the search finds out by exhausting it) but a state they reject never is.

use crate::data::{Dir, Pos, DIRECTIONS, FREEZE_OFFSETS};
use crate::map::Board;
use crate::state::State;

const CORNERS: [(Dir, Dir); 4] = [
    (Dir::Up, Dir::Right),
    (Dir::Right, Dir::Down),
    (Dir::Down, Dir::Left),
    (Dir::Left, Dir::Up),
];

/// `state` is the state after the push, `box_pos` the new position of the pushed box.
pub fn is_deadlock(map: &Board, state: &State, box_pos: Pos) -> bool {
    if map.is_goal(box_pos) {
        return false;
    }

    is_corner(map, box_pos) || is_frozen_pair(map, state, box_pos) || is_wall_line(map, box_pos)
}

/// Any box of the state which is not on a goal and fails one of the checks.
pub fn any_deadlock(map: &Board, state: &State) -> bool {
    state.boxes.iter().any(|&b| is_deadlock(map, state, b))
}

fn is_corner(map: &Board, box_pos: Pos) -> bool {
    CORNERS
        .iter()
        .any(|&(d1, d2)| map.is_wall(box_pos + d1) && map.is_wall(box_pos + d2))
}

/// Two boxes next to each other with walls on the same side of both.
/// Neither can move along the wall and neither can be pushed away from it.
fn is_frozen_pair(map: &Board, state: &State, box_pos: Pos) -> bool {
    DIRECTIONS.iter().any(|&dir| {
        state.has_box(box_pos + dir)
            && FREEZE_OFFSETS[dir as usize].iter().any(|pair| {
                pair.iter()
                    .all(|&(dr, dc)| map.is_wall(box_pos.offset(dr, dc)))
            })
    })
}

/// The box is against a wall which is unbroken between the extreme wall coordinates
/// of the whole board and there is no goal on the box's line.
///
/// The scan uses global bounds, not the wall segment around the box. On boards which
/// are not rectangular the scan then hits floor outside the level and the check doesn't fire.
fn is_wall_line(map: &Board, box_pos: Pos) -> bool {
    let (min_r, max_r) = map.wall_rows();
    let (min_c, max_c) = map.wall_cols();

    for &dir in &[Dir::Up, Dir::Down] {
        let wall_pos = box_pos + dir;
        if map.is_wall(wall_pos)
            && (min_c..=max_c).all(|c| map.is_wall(Pos::new(wall_pos.r, c)))
            && !(min_c..=max_c).any(|c| map.is_goal(Pos::new(box_pos.r, c)))
        {
            return true;
        }
    }

    for &dir in &[Dir::Left, Dir::Right] {
        let wall_pos = box_pos + dir;
        if map.is_wall(wall_pos)
            && (min_r..=max_r).all(|r| map.is_wall(Pos::new(r, wall_pos.c)))
            && !(min_r..=max_r).any(|r| map.is_goal(Pos::new(r, box_pos.c)))
        {
            return true;
        }
    }

    false
}
