// Terminology:
// move = changing player position by one cell
// push = a move that changes a box position
// step = a move that doesn't change a box position

use crate::data::{Dir, DIRECTIONS};
use crate::map::Board;
use crate::solver::deadlock;
use crate::state::State;

/// Applies one move without any pruning.
///
/// Returns the new state and whether the move was a push,
/// or `None` if the player would walk into a wall
/// or push a box into a wall or another box.
pub fn try_move(map: &Board, state: &State, dir: Dir) -> Option<(State, bool)> {
    let new_player_pos = state.player_pos + dir;
    if map.is_wall(new_player_pos) {
        return None;
    }

    if state.has_box(new_player_pos) {
        let push_dest = new_player_pos + dir;
        if map.is_wall(push_dest) || state.has_box(push_dest) {
            return None;
        }
        let new_state = state.with_box_moved(new_player_pos, new_player_pos, push_dest);
        Some((new_state, true))
    } else {
        Some((state.with_player(new_player_pos), false))
    }
}

/// Legal successors in the order up, down, left, right.
///
/// Pushes which leave the box in a detected deadlock (and not on a goal) are left out.
pub fn expand_move(map: &Board, state: &State) -> Vec<(Dir, State)> {
    let mut new_states = Vec::with_capacity(4);

    for &dir in &DIRECTIONS {
        let (new_state, is_push) = match try_move(map, state, dir) {
            Some(next) => next,
            None => continue,
        };
        if is_push {
            let push_dest = new_state.player_pos + dir;
            if deadlock::is_deadlock(map, &new_state, push_dest) {
                continue;
            }
        }
        new_states.push((dir, new_state));
    }

    new_states
}
