// Immutable per-turn view of the board
//
// Built fresh from each move request, read by the engine once, then dropped.

use crate::error::DecisionError;
use crate::types::{Coord, MoveRequest};

/// A snake on the board, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    id: String,
    name: String,
    body: Vec<Coord>,
}

impl Snake {
    pub fn new(id: impl Into<String>, name: impl Into<String>, body: Vec<Coord>) -> Self {
        Snake {
            id: id.into(),
            name: name.into(),
            body,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name to show in taunts; falls back to the id for unnamed snakes
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    pub fn body(&self) -> &[Coord] {
        &self.body
    }

    pub fn head(&self) -> Option<Coord> {
        self.body.first().copied()
    }

    /// Segment count
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments that stay occupied through the next turn: everything but the tail
    pub fn blocking_segments(&self) -> &[Coord] {
        let end = self.body.len().saturating_sub(1);
        &self.body[..end]
    }
}

#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    width: i32,
    height: i32,
    you_id: String,
    snakes: Vec<Snake>,
    food: Vec<Coord>,
}

impl BoardSnapshot {
    /// Creates a snapshot, rejecting non-positive board dimensions
    pub fn new(
        width: i32,
        height: i32,
        you_id: impl Into<String>,
        snakes: Vec<Snake>,
        food: Vec<Coord>,
    ) -> Result<Self, DecisionError> {
        if width <= 0 || height <= 0 {
            return Err(DecisionError::InvalidDimensions { width, height });
        }

        Ok(BoardSnapshot {
            width,
            height,
            you_id: you_id.into(),
            snakes,
            food,
        })
    }

    pub fn from_request(req: &MoveRequest) -> Result<Self, DecisionError> {
        let snakes = req
            .snakes
            .iter()
            .map(|s| Snake::new(s.id.clone(), s.name.clone(), s.coords.clone()))
            .collect();

        Self::new(req.width, req.height, req.you.clone(), snakes, req.food.clone())
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn you_id(&self) -> &str {
        &self.you_id
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn food(&self) -> &[Coord] {
        &self.food
    }

    pub fn self_snake(&self) -> Option<&Snake> {
        self.snakes.iter().find(|s| s.id == self.you_id)
    }

    pub fn opponents(&self) -> impl Iterator<Item = &Snake> {
        let you_id = self.you_id.as_str();
        self.snakes.iter().filter(move |s| s.id != you_id)
    }

    /// The opponent when exactly one other snake is on the board
    pub fn sole_opponent(&self) -> Option<&Snake> {
        let mut opponents = self.opponents();
        match (opponents.next(), opponents.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }
}
