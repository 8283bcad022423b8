// Safety filter: drops moves whose next head position is certainly fatal
//
// Tails are excluded from collision checks because every snake moves this turn.
// Growth after eating and head-to-head collisions are not modelled.

use crate::snapshot::BoardSnapshot;
use crate::types::{Coord, Direction};

/// Checks if a coordinate is out of bounds
pub fn is_out_of_bounds(coord: &Coord, board_width: i32, board_height: i32) -> bool {
    coord.x < 0 || coord.x >= board_width || coord.y < 0 || coord.y >= board_height
}

/// Checks if a coordinate collides with any snake body, tails excluded
pub fn is_collision(coord: &Coord, board: &BoardSnapshot) -> bool {
    board
        .snakes()
        .iter()
        .any(|snake| snake.blocking_segments().contains(coord))
}

/// Wall or body collision
pub fn is_lethal(coord: &Coord, board: &BoardSnapshot) -> bool {
    is_out_of_bounds(coord, board.width(), board.height()) || is_collision(coord, board)
}

/// All moves from `head` that are not lethal, in `Direction::all()` order
pub fn safe_moves(board: &BoardSnapshot, head: &Coord) -> Vec<Direction> {
    Direction::all()
        .iter()
        .filter(|dir| !is_lethal(&dir.apply(head), board))
        .copied()
        .collect()
}
