// Standalone replay tool for analyzing Battlesnake turn logs
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --all                  Replay all turns
//   --turns <turn1,turn2>  Replay specific turns (comma-separated)
//   --validate             Run validation mode with expected moves
//   --verbose              Show detailed output for each turn
//   --config <path>        Path to Snake.toml (default: Snake.toml)

use std::env;
use std::process;

use nano_snake::config::Config;
use nano_snake::replay::ReplayEngine;
use nano_snake::types::Direction;

enum Mode {
    All,
    Turns(String),
    Validate(String),
}

fn print_usage() {
    eprintln!("Battlesnake Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --all                   Replay all turns in the log");
    eprintln!("  --turns <T1,T2,...>     Replay specific turns (comma-separated)");
    eprintln!("  --validate <T:M,...>    Validate expected moves (format: turn:move,...)");
    eprintln!("  --verbose               Show detailed output for each turn");
    eprintln!("  --config <path>         Path to Snake.toml (default: Snake.toml)");
    eprintln!("  --help                  Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  # Replay all turns");
    eprintln!("  replay battlesnake_debug.jsonl --all");
    eprintln!();
    eprintln!("  # Replay specific turns");
    eprintln!("  replay battlesnake_debug.jsonl --turns 5,10,15");
    eprintln!();
    eprintln!("  # Validate expected moves");
    eprintln!("  replay battlesnake_debug.jsonl --validate 5:up,10:right|down");
}

fn parse_turns(s: &str) -> Result<Vec<u32>, String> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<u32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", t, e))
        })
        .collect()
}

fn parse_expected_moves(s: &str) -> Result<Vec<(u32, Vec<Direction>)>, String> {
    s.split(',')
        .map(|pair| {
            let parts: Vec<&str> = pair.trim().split(':').collect();
            if parts.len() != 2 {
                return Err(format!("Invalid format '{}'. Expected 'turn:move'", pair));
            }

            let turn = parts[0]
                .parse::<u32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", parts[0], e))?;

            // Support multiple acceptable moves separated by '|'
            let moves: Result<Vec<Direction>, String> =
                parts[1].split('|').map(Direction::parse).collect();

            Ok((turn, moves?))
        })
        .collect()
}

/// Takes the value following a flag, or exits with an error
fn flag_value(args: &[String], i: usize, flag: &str) -> String {
    match args.get(i + 1) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {} requires an argument", flag);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let wants_help = args.iter().any(|a| a == "--help");

    if args.len() < 2 || wants_help {
        print_usage();
        process::exit(if wants_help { 0 } else { 1 });
    }

    let log_file = &args[1];
    let mut config_path = "Snake.toml".to_string();
    let mut verbose = false;
    let mut mode = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--all" => mode = Some(Mode::All),
            "--turns" => {
                mode = Some(Mode::Turns(flag_value(&args, i, "--turns")));
                i += 1;
            }
            "--validate" => {
                mode = Some(Mode::Validate(flag_value(&args, i, "--validate")));
                i += 1;
            }
            "--config" => {
                config_path = flag_value(&args, i, "--config");
                i += 1;
            }
            "--verbose" => verbose = true,
            other => {
                eprintln!("Error: Unknown option '{}'", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(mode) = mode else {
        eprintln!("Error: Must specify --all, --turns, or --validate");
        print_usage();
        process::exit(1);
    };

    let config = Config::from_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from '{}': {}", config_path, e);
        eprintln!("Using default configuration");
        Config::default_hardcoded()
    });

    println!("Loaded configuration from: {}", config_path);
    println!("Replay log file: {}", log_file);
    println!();

    let engine = ReplayEngine::new(config, verbose);

    let entries = match engine.load_log_file(log_file) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error loading log file: {}", e);
            process::exit(1);
        }
    };

    if entries.is_empty() {
        eprintln!("Error: Log file is empty");
        process::exit(1);
    }

    println!("Loaded {} log entries\n", entries.len());

    match mode {
        Mode::All => {
            println!("Replaying all {} turns...\n", entries.len());
            let results = engine.replay_all(&entries);
            engine.print_report(&results);
        }
        Mode::Turns(turn_arg) => {
            let turns = parse_turns(&turn_arg).unwrap_or_else(|e| {
                eprintln!("Error parsing turns: {}", e);
                process::exit(1);
            });

            println!("Replaying {} specific turn(s)...\n", turns.len());
            match engine.replay_turns(&entries, &turns) {
                Ok(results) => engine.print_report(&results),
                Err(e) => {
                    eprintln!("Error during replay: {}", e);
                    process::exit(1);
                }
            }
        }
        Mode::Validate(validate_arg) => {
            let expected_moves = parse_expected_moves(&validate_arg).unwrap_or_else(|e| {
                eprintln!("Error parsing expected moves: {}", e);
                process::exit(1);
            });

            println!("Validating {} expected move(s)...\n", expected_moves.len());
            match engine.validate_expected_moves(&entries, &expected_moves) {
                Ok(()) => println!("✓ All expected moves validated successfully!"),
                Err(e) => {
                    eprintln!("✗ Validation failed: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
