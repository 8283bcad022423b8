// Replay module for analyzing historical turn logs and debugging decision-making
//
// This module provides functionality to:
// 1. Parse JSONL debug logs
// 2. Replay the engine on historical requests
// 3. Check that each logged move is one the engine could have produced
// 4. Generate analysis reports
//
// Tie-breaks are random, so a replayed move may differ from the logged one without
// anything being wrong. A turn only counts as inconsistent when the logged move lies
// outside the set of moves the engine could return for that snapshot.

use log::{info, warn};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::debug_logger::TurnLogEntry;
use crate::engine::{Engine, Selection};
use crate::snapshot::BoardSnapshot;
use crate::types::Direction;

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: u32,
    pub original_move: Direction,
    pub replayed_move: Direction,
    pub selection: Selection,
    pub possible_moves: Vec<Direction>,
    /// The logged move is one the engine could have chosen
    pub consistent: bool,
    pub computation_time_us: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub consistent: usize,
    pub inconsistent: usize,
    pub identical: usize,
    pub consistency_rate: f64,
}

/// Replay engine for analyzing debug logs
pub struct ReplayEngine {
    engine: Engine,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine with the given configuration
    pub fn new(config: Config, verbose: bool) -> Self {
        ReplayEngine {
            engine: Engine::from_config(&config),
            verbose,
        }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<TurnLogEntry>, String> {
        let file = File::open(log_path.as_ref())
            .map_err(|e| format!("Failed to open log file: {}", e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: TurnLogEntry = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Replays a single log entry and compares the result
    pub fn replay_entry(&self, entry: &TurnLogEntry) -> Result<ReplayResult, String> {
        let start_time = Instant::now();

        let original_move = Direction::parse(&entry.chosen_move)?;
        let board = BoardSnapshot::from_request(&entry.request).map_err(|e| e.to_string())?;
        let analysis = self.engine.analyze(&board).map_err(|e| e.to_string())?;
        let decision = self.engine.decide(&board).map_err(|e| e.to_string())?;

        let possible_moves = analysis.possible_moves();
        let consistent = possible_moves.contains(&original_move);

        let result = ReplayResult {
            turn: entry.turn,
            original_move,
            replayed_move: decision.direction,
            selection: decision.selection,
            possible_moves,
            consistent,
            computation_time_us: start_time.elapsed().as_micros(),
        };

        if self.verbose {
            if consistent {
                info!(
                    "Turn {}: ✓ CONSISTENT - logged {}, replayed {} ({})",
                    entry.turn,
                    original_move.as_str(),
                    result.replayed_move.as_str(),
                    result.selection.as_str()
                );
            } else {
                warn!(
                    "Turn {}: ✗ INCONSISTENT - logged {}, engine allows {:?}",
                    entry.turn,
                    original_move.as_str(),
                    result.possible_moves
                );
            }
        }

        Ok(result)
    }

    /// Replays all entries in a log file, in parallel; results keep log order
    pub fn replay_all(&self, entries: &[TurnLogEntry]) -> Vec<ReplayResult> {
        entries
            .par_iter()
            .filter_map(|entry| match self.replay_entry(entry) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", entry.turn, e);
                    None
                }
            })
            .collect()
    }

    /// Replays specific turns from a log file
    pub fn replay_turns(
        &self,
        entries: &[TurnLogEntry],
        turn_numbers: &[u32],
    ) -> Result<Vec<ReplayResult>, String> {
        let mut selected = Vec::with_capacity(turn_numbers.len());

        for turn_num in turn_numbers {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn_num)
                .ok_or_else(|| format!("Turn {} not found in log file", turn_num))?;
            selected.push(entry.clone());
        }

        Ok(self.replay_all(&selected))
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let consistent = results.iter().filter(|r| r.consistent).count();
        let identical = results
            .iter()
            .filter(|r| r.original_move == r.replayed_move)
            .count();
        let consistency_rate = if total_turns > 0 {
            (consistent as f64 / total_turns as f64) * 100.0
        } else {
            0.0
        };

        ReplayStats {
            total_turns,
            consistent,
            inconsistent: total_turns - consistent,
            identical,
            consistency_rate,
        }
    }

    /// Prints a detailed report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = self.generate_stats(results);

        println!("\n═══════════════════════════════════════════════════════════");
        println!("                    REPLAY REPORT");
        println!("═══════════════════════════════════════════════════════════");
        println!("Total Turns:    {}", stats.total_turns);
        println!(
            "Consistent:     {} ({:.1}%)",
            stats.consistent, stats.consistency_rate
        );
        println!("Inconsistent:   {}", stats.inconsistent);
        println!("Identical:      {}", stats.identical);
        println!("═══════════════════════════════════════════════════════════\n");

        let inconsistent: Vec<_> = results.iter().filter(|r| !r.consistent).collect();
        if !inconsistent.is_empty() {
            println!("═══════════════════════════════════════════════════════════");
            println!("                 INCONSISTENT TURNS");
            println!("═══════════════════════════════════════════════════════════");

            for result in inconsistent {
                let allowed: Vec<&str> = result.possible_moves.iter().map(|d| d.as_str()).collect();
                println!(
                    "Turn {}: logged {}, engine allows [{}]",
                    result.turn,
                    result.original_move.as_str(),
                    allowed.join(", ")
                );
            }
            println!();
        }
    }

    /// Validates that specific expected moves were made
    pub fn validate_expected_moves(
        &self,
        entries: &[TurnLogEntry],
        expected_moves: &[(u32, Vec<Direction>)], // (turn, acceptable_moves)
    ) -> Result<(), String> {
        for (turn, acceptable) in expected_moves {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn)
                .ok_or_else(|| format!("Turn {} not found in log", turn))?;

            let actual_move = Direction::parse(&entry.chosen_move)?;

            if !acceptable.contains(&actual_move) {
                return Err(format!(
                    "Turn {}: Expected one of {:?}, but got {}",
                    turn,
                    acceptable.iter().map(|d| d.as_str()).collect::<Vec<_>>(),
                    actual_move.as_str()
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, MoveRequest, WireSnake};

    fn entry(turn: u32, chosen_move: &str) -> TurnLogEntry {
        TurnLogEntry {
            turn,
            game_id: "g".to_string(),
            chosen_move: chosen_move.to_string(),
            taunt: "Boo!".to_string(),
            request: MoveRequest {
                game_id: "g".to_string(),
                turn,
                width: 10,
                height: 10,
                you: "me".to_string(),
                snakes: vec![WireSnake {
                    id: "me".to_string(),
                    name: "Nano".to_string(),
                    coords: vec![Coord::new(5, 5), Coord::new(5, 6), Coord::new(5, 7)],
                    health_points: None,
                    taunt: None,
                }],
                food: vec![Coord::new(5, 1)],
            },
            timestamp: String::new(),
        }
    }

    #[test]
    fn test_preferred_move_is_consistent() {
        let engine = ReplayEngine::new(Config::default_hardcoded(), false);
        let result = engine.replay_entry(&entry(1, "up")).unwrap();
        assert!(result.consistent);
        assert_eq!(result.replayed_move, Direction::Up);
        assert_eq!(result.possible_moves, vec![Direction::Up]);
    }

    #[test]
    fn test_move_against_preference_is_inconsistent() {
        let engine = ReplayEngine::new(Config::default_hardcoded(), false);
        let result = engine.replay_entry(&entry(2, "left")).unwrap();
        assert!(!result.consistent);
    }

    #[test]
    fn test_bad_direction_is_an_error() {
        let engine = ReplayEngine::new(Config::default_hardcoded(), false);
        assert!(engine.replay_entry(&entry(3, "north")).is_err());
    }

    #[test]
    fn test_replay_turns_and_stats() {
        let engine = ReplayEngine::new(Config::default_hardcoded(), false);
        let entries = vec![entry(1, "up"), entry(2, "left"), entry(3, "up")];

        let results = engine.replay_turns(&entries, &[1, 2]).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].turn, 1);

        let stats = engine.generate_stats(&engine.replay_all(&entries));
        assert_eq!(stats.total_turns, 3);
        assert_eq!(stats.consistent, 2);
        assert_eq!(stats.inconsistent, 1);
        assert_eq!(stats.identical, 2);

        assert!(engine.replay_turns(&entries, &[99]).is_err());
    }

    #[test]
    fn test_validate_expected_moves() {
        let engine = ReplayEngine::new(Config::default_hardcoded(), false);
        let entries = vec![entry(1, "up"), entry(2, "left")];

        assert!(engine
            .validate_expected_moves(&entries, &[(1, vec![Direction::Up])])
            .is_ok());
        assert!(engine
            .validate_expected_moves(&entries, &[(2, vec![Direction::Up, Direction::Down])])
            .is_err());
    }
}
