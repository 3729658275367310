use crate::level::PuzzleErr;
use crate::map::Board;
use crate::state::State;

/// Makes sure the player can't walk off the board.
///
/// This is the only place which has to check bounds,
/// everything the player can reach afterwards is surrounded by walls.
/// Boxes don't block here since they can be pushed away.
pub(crate) fn check_enclosure(map: &Board, state: &State) -> Result<(), PuzzleErr> {
    let mut visited = map.grid.scratchpad();

    let mut to_visit = vec![state.player_pos];
    while let Some(cur) = to_visit.pop() {
        if visited[cur] {
            continue;
        }
        visited[cur] = true;

        for &next in &cur.neighbors() {
            if !map.grid.contains(next) {
                // we got out of bounds without hitting a wall
                return Err(PuzzleErr::IncompleteBorder);
            }
            if !visited[next] && !map.is_wall(next) {
                to_visit.push(next);
            }
        }
    }

    Ok(())
}
