// Target-direction heuristics
//
// A strategy looks at the board and our head and names the directions it would like to
// move in. It never checks safety; the engine intersects its answer with the safe set.

use crate::snapshot::{BoardSnapshot, Snake};
use crate::types::{Coord, Direction};

/// Capability shared by all target heuristics
pub trait TargetStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Directions that bring `head` closer to this strategy's target.
    /// Empty means no preference.
    fn preferred_directions(&self, board: &BoardSnapshot, head: Coord) -> Vec<Direction>;
}

/// Directions that shrink the x or y offset to `target`.
/// Ordered left, right, up, down; empty when `target == head`.
pub fn directions_toward(head: Coord, target: Coord) -> Vec<Direction> {
    let mut dirs = Vec::with_capacity(2);
    if target.x < head.x {
        dirs.push(Direction::Left);
    }
    if target.x > head.x {
        dirs.push(Direction::Right);
    }
    if target.y < head.y {
        dirs.push(Direction::Up);
    }
    if target.y > head.y {
        dirs.push(Direction::Down);
    }
    dirs
}

/// Heads for the closest food item by Manhattan distance
#[derive(Debug, Default, Clone, Copy)]
pub struct FoodSeeking;

impl FoodSeeking {
    /// Closest food; ties go to the item listed first
    pub fn nearest_food(board: &BoardSnapshot, head: Coord) -> Option<Coord> {
        board
            .food()
            .iter()
            .min_by_key(|food| head.manhattan(food))
            .copied()
    }
}

impl TargetStrategy for FoodSeeking {
    fn name(&self) -> &'static str {
        "food"
    }

    fn preferred_directions(&self, board: &BoardSnapshot, head: Coord) -> Vec<Direction> {
        match Self::nearest_food(board, head) {
            Some(food) => directions_toward(head, food),
            None => vec![],
        }
    }
}

/// Heads for the closest opponent head among opponents strictly shorter than us
#[derive(Debug, Default, Clone, Copy)]
pub struct Attack;

impl Attack {
    pub fn target<'a>(board: &'a BoardSnapshot, head: Coord) -> Option<&'a Snake> {
        let our_len = board.self_snake()?.len();

        board
            .opponents()
            .filter(|s| s.len() < our_len)
            .filter_map(|s| s.head().map(|h| (head.manhattan(&h), s)))
            .min_by_key(|(dist, _)| *dist)
            .map(|(_, s)| s)
    }
}

impl TargetStrategy for Attack {
    fn name(&self) -> &'static str {
        "attack"
    }

    fn preferred_directions(&self, board: &BoardSnapshot, head: Coord) -> Vec<Direction> {
        match Self::target(board, head).and_then(|s| s.head()) {
            Some(their_head) => directions_toward(head, their_head),
            None => vec![],
        }
    }
}
