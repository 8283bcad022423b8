// Library exports for the Battlesnake bot
// This allows the server, the replay tool and the tests to share the decision logic

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod engine;
pub mod error;
pub mod heuristics;
pub mod random;
pub mod replay;
pub mod safety;
pub mod snapshot;
pub mod types;
