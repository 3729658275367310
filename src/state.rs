use crate::data::Pos;
use crate::map::Board;

/// Player position and box positions.
///
/// Boxes are kept sorted so two states with the same boxes compare and hash equal
/// no matter in which order the boxes were pushed. The board is not part of the identity,
/// a search always runs on a single board.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub(crate) player_pos: Pos,
    pub(crate) boxes: Vec<Pos>,
}

impl State {
    pub(crate) fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort();
        State { player_pos, boxes }
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub(crate) fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    /// Moves the box at `from` to `to`, keeping the boxes sorted.
    pub(crate) fn with_box_moved(&self, player_pos: Pos, from: Pos, to: Pos) -> State {
        let mut boxes = self.boxes.clone();
        if let Ok(i) = boxes.binary_search(&from) {
            boxes.remove(i);
        }
        let i = boxes.binary_search(&to).unwrap_or_else(|i| i);
        boxes.insert(i, to);
        State { player_pos, boxes }
    }

    pub(crate) fn with_player(&self, player_pos: Pos) -> State {
        State {
            player_pos,
            boxes: self.boxes.clone(),
        }
    }

    /// The box set equals the goal set.
    ///
    /// Box and goal counts are validated to be equal so checking every box is enough.
    pub fn is_solved(&self, board: &Board) -> bool {
        self.boxes.iter().all(|&b| board.is_goal(b))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn hash(state: &State) -> u64 {
        let mut hasher = DefaultHasher::new();
        state.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn box_order_does_not_matter() {
        let a = State::new(Pos::new(1, 1), vec![Pos::new(2, 2), Pos::new(1, 3)]);
        let b = State::new(Pos::new(1, 1), vec![Pos::new(1, 3), Pos::new(2, 2)]);
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));

        let c = State::new(Pos::new(1, 2), vec![Pos::new(1, 3), Pos::new(2, 2)]);
        assert_ne!(a, c);
    }

    #[test]
    fn moving_boxes_keeps_order() {
        let state = State::new(Pos::new(1, 1), vec![Pos::new(1, 2), Pos::new(3, 3)]);
        let moved = state.with_box_moved(Pos::new(1, 2), Pos::new(1, 2), Pos::new(4, 0));
        assert_eq!(moved.boxes, vec![Pos::new(3, 3), Pos::new(4, 0)]);
        assert_eq!(
            moved,
            State::new(Pos::new(1, 2), vec![Pos::new(4, 0), Pos::new(3, 3)])
        );
        assert!(moved.has_box(Pos::new(4, 0)));
        assert!(!moved.has_box(Pos::new(1, 2)));
    }
}
