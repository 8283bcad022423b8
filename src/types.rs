// Battlesnake API Types (legacy per-turn protocol)
// Coordinates travel as `[x, y]` pairs and y grows downward, so "up" decreases y.

use serde::{Deserialize, Serialize};

/// 2D coordinate on the board
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Manhattan distance to another coordinate, widened so far-off coordinates cannot overflow
    pub fn manhattan(&self, other: &Coord) -> i64 {
        (self.x as i64 - other.x as i64).abs() + (self.y as i64 - other.y as i64).abs()
    }
}

impl From<[i32; 2]> for Coord {
    fn from(pair: [i32; 2]) -> Self {
        Coord { x: pair[0], y: pair[1] }
    }
}

impl From<Coord> for [i32; 2] {
    fn from(coord: Coord) -> Self {
        [coord.x, coord.y]
    }
}

/// Represents the four possible movement directions for a Battlesnake
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all possible directions in enumeration order
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// Converts direction to string representation for API response
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Parses a direction token, case-insensitively
    pub fn parse(s: &str) -> Result<Direction, String> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(format!("Invalid direction: {}", s)),
        }
    }

    /// Unit delta for this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Calculates the next coordinate when moving in this direction
    pub fn apply(&self, coord: &Coord) -> Coord {
        let (dx, dy) = self.delta();
        Coord {
            x: coord.x + dx,
            y: coord.y + dy,
        }
    }
}

/// Snake as it appears in a move request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct WireSnake {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub coords: Vec<Coord>,
    #[serde(default)]
    pub health_points: Option<i32>,
    #[serde(default)]
    pub taunt: Option<String>,
}

/// Body of POST /start
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct StartRequest {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
}

/// Identity returned from POST /start
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct StartResponse {
    pub name: String,
    pub color: String,
    pub head_url: String,
    pub head_type: String,
    pub tail_type: String,
    pub taunt: String,
}

/// Body of POST /move
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MoveRequest {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub turn: u32,
    pub width: i32,
    pub height: i32,
    pub you: String,
    pub snakes: Vec<WireSnake>,
    #[serde(default)]
    pub food: Vec<Coord>,
}

/// Reply to POST /move
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub direction: Direction,
    pub taunt: String,
}
