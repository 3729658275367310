use fnv::FnvHashMap;

use crate::data::Dir;
use crate::moves::{Move, Moves};
use crate::state::State;

/// Discovered states mapped to the state they were first reached from and the move taken.
/// The initial state maps to `None`.
pub(crate) type CameFrom<'a> = FnvHashMap<&'a State, Option<(&'a State, Dir)>>;

/// Walks the parent pointers from `final_state` back to the initial state.
pub(crate) fn reconstruct_moves(came_from: &CameFrom<'_>, final_state: &State) -> Moves {
    let mut moves = Vec::new();

    let mut cur = final_state;
    while let Some(&Some((prev, dir))) = came_from.get(cur) {
        // a push changes the boxes, a step only the player
        moves.push(Move::new(dir, prev.boxes != cur.boxes));
        cur = prev;
    }

    moves.reverse();
    Moves::new(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pos;

    #[test]
    fn backtracking() {
        let start = State::new(Pos::new(1, 1), vec![Pos::new(1, 2)]);
        let pushed = State::new(Pos::new(1, 2), vec![Pos::new(1, 3)]);
        let stepped = State::new(Pos::new(2, 2), vec![Pos::new(1, 3)]);

        let mut came_from = CameFrom::default();
        came_from.insert(&start, None);
        came_from.insert(&pushed, Some((&start, Dir::Right)));
        came_from.insert(&stepped, Some((&pushed, Dir::Down)));

        let moves = reconstruct_moves(&came_from, &stepped);
        assert_eq!(moves.to_string(), "RD");
        assert_eq!(moves.push_cnt(), 1);
        assert_eq!(moves.lurd(), "Rd");

        assert_eq!(reconstruct_moves(&came_from, &start).move_cnt(), 0);
    }
}
