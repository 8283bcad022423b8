// Welcome to
// __________         __    __  .__                               __
// \______   \_____ _/  |__/  |_|  |   ____   ______ ____ _____  |  | __ ____
//  |    |  _/\__  \\   __\   __\  | _/ __ \ /  ___//    \\__  \ |  |/ // __ \
//  |    |   \ / __ \|  |  |  | |  |_\  ___/ \___ \|   |  \/ __ \|    <\  ___/
//  |________/(______/__|  |__| |____/\_____>______>___|__(______/__|__\\_____>
//
// Endpoint-level behavior. The HTTP layer deserializes requests and hands them here;
// all move logic lives in the engine.

use log::{error, info};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::engine::{Decision, Engine, FALLBACK_MOVE};
use crate::error::DecisionError;
use crate::random::RandomSource;
use crate::snapshot::BoardSnapshot;
use crate::types::{MoveRequest, MoveResponse, StartRequest, StartResponse};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    engine: Engine,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        let engine = Engine::from_config(&config);
        Bot {
            config,
            engine,
            debug_logger: DebugLogger::disabled(),
        }
    }

    /// Replaces the engine's random source
    pub fn with_random(mut self, rng: Arc<dyn RandomSource>) -> Self {
        self.engine = self.engine.with_random(rng);
        self
    }

    pub fn with_debug_logger(mut self, debug_logger: DebugLogger) -> Self {
        self.debug_logger = debug_logger;
        self
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        json!({
            "name": self.config.identity.name,
            "color": self.config.identity.color,
            "head_type": self.config.identity.head_type,
            "tail_type": self.config.identity.tail_type,
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, req: &StartRequest) -> StartResponse {
        info!(
            "GAME START {} ({}x{})",
            req.game_id, req.width, req.height
        );

        let identity = &self.config.identity;
        StartResponse {
            name: identity.name.clone(),
            color: identity.color.clone(),
            head_url: identity.head_url.clone(),
            head_type: identity.head_type.clone(),
            tail_type: identity.tail_type.clone(),
            taunt: identity.start_taunt.clone(),
        }
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self) -> Value {
        info!("GAME OVER");
        json!({})
    }

    /// Builds the snapshot for a request and runs the engine on it
    pub fn decide(&self, req: &MoveRequest) -> Result<Decision, DecisionError> {
        let board = BoardSnapshot::from_request(req)?;
        self.engine.decide(&board)
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// A request the engine cannot reason about is answered with the fallback move
    /// and the forced-move taunt; the error is logged.
    pub async fn get_move(&self, req: &MoveRequest) -> MoveResponse {
        let start_time = Instant::now();

        let response = match self.decide(req) {
            Ok(decision) => {
                info!(
                    "Turn {}: Chose {} ({}, time: {}us)",
                    req.turn,
                    decision.direction.as_str(),
                    decision.selection.as_str(),
                    start_time.elapsed().as_micros()
                );
                MoveResponse {
                    direction: decision.direction,
                    taunt: decision.taunt,
                }
            }
            Err(e) => {
                error!(
                    "Turn {}: cannot decide ({}), answering {}",
                    req.turn,
                    e,
                    FALLBACK_MOVE.as_str()
                );
                MoveResponse {
                    direction: FALLBACK_MOVE,
                    taunt: self.config.taunts.forced.clone(),
                }
            }
        };

        self.debug_logger
            .log_move(req.clone(), response.direction, response.taunt.clone());

        response
    }
}
