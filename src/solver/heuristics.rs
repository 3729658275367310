//! Estimates of the remaining cost, less is better.
//!
//! Each box gets a goal by one greedy pass over the boxes in sorted order, each taking
//! the nearest goal nobody took yet. That's not a minimum cost matching so even the plain
//! distance sums are only approximations of a lower bound.

use crate::config::Heuristic;
use crate::data::Pos;
use crate::map::Board;
use crate::solver::deadlock;
use crate::state::State;

/// Penalty per pair of boxes which have to get around each other on their line.
const LINEAR_CONFLICT_PENALTY: f64 = 2.0;

/// Cost of the heuristic, optionally treating detected deadlocks as unsolvable (infinite).
pub fn estimate(
    map: &Board,
    state: &State,
    heuristic: Heuristic,
    check_deadlocks: bool,
) -> f64 {
    if check_deadlocks && deadlock::any_deadlock(map, state) {
        return f64::INFINITY;
    }
    evaluate(heuristic, state, map.goals())
}

pub fn evaluate(heuristic: Heuristic, state: &State, goals: &[Pos]) -> f64 {
    match heuristic {
        Heuristic::Manhattan => manhattan(state, goals),
        Heuristic::Euclidean => euclidean(state, goals),
        Heuristic::LinearConflict => manhattan_linear_conflicts(state, goals),
        Heuristic::ManhattanPlusPlayer => manhattan_plus_player(state, goals),
    }
}

/// Pairs every box with a goal, `None` if goals ran out.
///
/// Ties go to the goal which comes first in `goals`.
pub fn assign_goals<D>(boxes: &[Pos], goals: &[Pos], dist: D) -> Vec<(Pos, Option<Pos>)>
where
    D: Fn(Pos, Pos) -> f64,
{
    let mut remaining = goals.to_vec();
    let mut assignment = Vec::with_capacity(boxes.len());

    for &box_pos in boxes {
        let mut best: Option<(usize, f64)> = None;
        for (i, &goal) in remaining.iter().enumerate() {
            let d = dist(box_pos, goal);
            match best {
                Some((_, best_dist)) if best_dist <= d => {}
                _ => best = Some((i, d)),
            }
        }
        // `remove`, not `swap_remove`, keeps the tie-break order stable
        let goal = best.map(|(i, _)| remaining.remove(i));
        assignment.push((box_pos, goal));
    }

    assignment
}

fn manhattan_dist(a: Pos, b: Pos) -> f64 {
    f64::from(a.dist(b))
}

fn sum_assigned<D>(state: &State, goals: &[Pos], dist: D) -> f64
where
    D: Fn(Pos, Pos) -> f64,
{
    assign_goals(&state.boxes, goals, &dist)
        .into_iter()
        .map(|(b, g)| g.map_or(f64::INFINITY, |g| dist(b, g)))
        .sum()
}

pub fn manhattan(state: &State, goals: &[Pos]) -> f64 {
    sum_assigned(state, goals, manhattan_dist)
}

pub fn euclidean(state: &State, goals: &[Pos]) -> f64 {
    sum_assigned(state, goals, Pos::euclidean_dist)
}

/// Manhattan plus a penalty for every two boxes on one row (column) whose goals are
/// on that same row (column) in the opposite order.
pub fn manhattan_linear_conflicts(state: &State, goals: &[Pos]) -> f64 {
    let assignment = assign_goals(&state.boxes, goals, manhattan_dist);

    let mut total = 0.0;
    for &(b, g) in &assignment {
        total += g.map_or(f64::INFINITY, |g| manhattan_dist(b, g));
    }

    let mut conflicts = 0;
    for (i, &(b1, g1)) in assignment.iter().enumerate() {
        let g1 = match g1 {
            Some(g) => g,
            None => continue,
        };
        for &(b2, g2) in &assignment[i + 1..] {
            let g2 = match g2 {
                Some(g) => g,
                None => continue,
            };
            let same_row = b1.r == b2.r && g1.r == b1.r && g2.r == b1.r;
            if same_row && (b1.c - b2.c) * (g1.c - g2.c) < 0 {
                conflicts += 1;
            }
            let same_col = b1.c == b2.c && g1.c == b1.c && g2.c == b1.c;
            if same_col && (b1.r - b2.r) * (g1.r - g2.r) < 0 {
                conflicts += 1;
            }
        }
    }

    total + f64::from(conflicts) * LINEAR_CONFLICT_PENALTY
}

/// Manhattan plus the player's distance to every box.
///
/// Not admissible - the player never has to walk to each box separately from where it stands.
pub fn manhattan_plus_player(state: &State, goals: &[Pos]) -> f64 {
    let player_dists: i32 = state.boxes.iter().map(|b| state.player_pos.dist(*b)).sum();
    manhattan(state, goals) + f64::from(player_dists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    fn state(player: Pos, boxes: &[Pos]) -> State {
        State::new(player, boxes.to_vec())
    }

    #[test]
    fn greedy_assignment() {
        let boxes = [Pos::new(2, 3), Pos::new(2, 4)];
        let goals = [Pos::new(2, 0), Pos::new(2, 5)];
        let assignment = assign_goals(&boxes, &goals, manhattan_dist);
        // the first box grabs the closer goal even though that's worse overall
        assert_eq!(
            assignment,
            vec![
                (Pos::new(2, 3), Some(Pos::new(2, 5))),
                (Pos::new(2, 4), Some(Pos::new(2, 0))),
            ]
        );

        // ties go to the first goal
        let assignment = assign_goals(&[Pos::new(2, 3)], &[Pos::new(2, 1), Pos::new(2, 5)], manhattan_dist);
        assert_eq!(assignment, vec![(Pos::new(2, 3), Some(Pos::new(2, 1)))]);

        let assignment = assign_goals(&boxes, &goals[..1], manhattan_dist);
        assert_eq!(assignment[1], (Pos::new(2, 4), None));
    }

    #[test]
    fn distances() {
        let goals = [Pos::new(2, 0), Pos::new(2, 5)];
        let s = state(Pos::new(1, 1), &[Pos::new(2, 3), Pos::new(2, 4)]);

        assert_eq!(manhattan(&s, &goals), 6.0);
        assert_eq!(manhattan_linear_conflicts(&s, &goals), 8.0);
        assert_eq!(manhattan_plus_player(&s, &goals), 6.0 + 3.0 + 4.0);

        let s = state(Pos::new(1, 1), &[Pos::new(0, 0)]);
        assert!((euclidean(&s, &[Pos::new(3, 4)]) - 5.0).abs() < 1e-9);
        assert_eq!(manhattan(&s, &[Pos::new(3, 4)]), 7.0);
    }

    #[test]
    fn no_conflict_without_reversal() {
        let goals = [Pos::new(4, 1), Pos::new(1, 1)];
        let s = state(Pos::new(0, 0), &[Pos::new(2, 1), Pos::new(3, 1)]);
        // boxes keep their relative order in the column
        assert_eq!(manhattan_linear_conflicts(&s, &goals), manhattan(&s, &goals));

        let s = state(Pos::new(0, 0), &[]);
        assert_eq!(manhattan(&s, &[]), 0.0);
        assert_eq!(manhattan_linear_conflicts(&s, &[]), 0.0);
    }

    #[test]
    fn deadlocks_are_infinite() {
        let level: Level = r"
######
#    #
# $@ #
#   .#
######
"
        .parse()
        .unwrap();
        let cornered = State::new(level.state.player_pos, vec![Pos::new(1, 1)]);

        assert_eq!(estimate(&level.map, &level.state, Heuristic::Manhattan, true), 3.0);
        assert_eq!(estimate(&level.map, &cornered, Heuristic::Manhattan, false), 5.0);
        assert_eq!(
            estimate(&level.map, &cornered, Heuristic::Manhattan, true),
            f64::INFINITY
        );
    }
}
