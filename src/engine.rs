// Move decision engine
//
// One decision per snapshot, no state carried between turns:
// 1. Safety filter over the four directions
// 2. Food-seeking and attack heuristics each name preferred directions
// 3. The gating heuristic's safe directions win; otherwise any safe move; otherwise DOWN

use log::debug;
use std::sync::Arc;

use crate::config::{Config, Gate, TauntConfig};
use crate::error::DecisionError;
use crate::heuristics::{Attack, FoodSeeking, TargetStrategy};
use crate::random::{choose, RandomSource};
use crate::safety::{is_out_of_bounds, safe_moves};
use crate::snapshot::BoardSnapshot;
use crate::types::{Coord, Direction};

/// Move returned when every direction is lethal
pub const FALLBACK_MOVE: Direction = Direction::Down;

/// How the final move was picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Drawn from the gating heuristic's safe directions
    Preferred,
    /// Drawn from all safe directions
    Random,
    /// Nothing was safe
    Forced,
}

impl Selection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::Preferred => "preferred",
            Selection::Random => "random",
            Selection::Forced => "forced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub direction: Direction,
    pub taunt: String,
    pub selection: Selection,
}

/// Everything the engine knows about a turn before drawing a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnAnalysis {
    pub head: Coord,
    pub safe_moves: Vec<Direction>,
    pub food_preference: Vec<Direction>,
    pub attack_preference: Vec<Direction>,
    /// Preference of whichever heuristic gates the final selection
    pub gating_preference: Vec<Direction>,
}

impl TurnAnalysis {
    /// Gating directions that are also safe, in enumeration order
    pub fn safe_preferred(&self) -> Vec<Direction> {
        self.safe_moves
            .iter()
            .filter(|dir| self.gating_preference.contains(dir))
            .copied()
            .collect()
    }

    /// Every move `decide` could return for this turn
    pub fn possible_moves(&self) -> Vec<Direction> {
        if self.safe_moves.is_empty() {
            return vec![FALLBACK_MOVE];
        }
        let preferred = self.safe_preferred();
        if preferred.is_empty() {
            self.safe_moves.clone()
        } else {
            preferred
        }
    }
}

pub struct Engine {
    taunts: TauntConfig,
    gate: Gate,
    food: Box<dyn TargetStrategy>,
    attack: Box<dyn TargetStrategy>,
    rng: Arc<dyn RandomSource>,
}

impl Engine {
    pub fn new(taunts: TauntConfig, gate: Gate, rng: Arc<dyn RandomSource>) -> Self {
        Engine {
            taunts,
            gate,
            food: Box::new(FoodSeeking),
            attack: Box::new(Attack),
            rng,
        }
    }

    /// Builds an engine using the configured random source
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.taunts.clone(),
            config.strategy.gate,
            config.random.build_source(),
        )
    }

    /// Same engine with a different random source
    pub fn with_random(mut self, rng: Arc<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    /// Runs the safety filter and both heuristics without drawing a move
    pub fn analyze(&self, board: &BoardSnapshot) -> Result<TurnAnalysis, DecisionError> {
        let you = board
            .self_snake()
            .ok_or_else(|| DecisionError::SelfNotFound(board.you_id().to_string()))?;
        let head = you
            .head()
            .ok_or_else(|| DecisionError::EmptyBody(you.id().to_string()))?;

        if is_out_of_bounds(&head, board.width(), board.height()) {
            return Err(DecisionError::HeadOutOfBounds {
                id: you.id().to_string(),
                x: head.x,
                y: head.y,
            });
        }

        let safe_moves = safe_moves(board, &head);
        let food_preference = self.food.preferred_directions(board, head);
        let attack_preference = self.attack.preferred_directions(board, head);

        let gating_preference = match self.gate {
            Gate::Attack if !attack_preference.is_empty() => attack_preference.clone(),
            _ => food_preference.clone(),
        };

        debug!(
            "head=({}, {}) safe={:?} {}={:?} {}={:?} gate={:?}",
            head.x,
            head.y,
            safe_moves,
            self.food.name(),
            food_preference,
            self.attack.name(),
            attack_preference,
            self.gate
        );

        Ok(TurnAnalysis {
            head,
            safe_moves,
            food_preference,
            attack_preference,
            gating_preference,
        })
    }

    /// Chooses this turn's move and taunt
    pub fn decide(&self, board: &BoardSnapshot) -> Result<Decision, DecisionError> {
        let analysis = self.analyze(board)?;

        if analysis.safe_moves.is_empty() {
            return Ok(Decision {
                direction: FALLBACK_MOVE,
                taunt: self.taunts.forced.clone(),
                selection: Selection::Forced,
            });
        }

        let rng = self.rng.as_ref();
        let (direction, selection) = match choose(rng, &analysis.safe_preferred()) {
            Some(dir) => (dir, Selection::Preferred),
            None => match choose(rng, &analysis.safe_moves) {
                Some(dir) => (dir, Selection::Random),
                None => (FALLBACK_MOVE, Selection::Forced),
            },
        };

        Ok(Decision {
            direction,
            taunt: self.taunt_for(board),
            selection,
        })
    }

    fn taunt_for(&self, board: &BoardSnapshot) -> String {
        match board.sole_opponent() {
            Some(opponent) => self.taunts.render_named(opponent.display_name()),
            None => self.taunts.generic.clone(),
        }
    }
}
