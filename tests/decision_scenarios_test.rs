// Integration tests for per-turn decisions
//
// Each test builds a move request the way the server would receive it and checks
// the move and taunt the bot answers with.

use nano_snake::bot::Bot;
use nano_snake::config::Config;
use nano_snake::engine::{Engine, Selection};
use nano_snake::random::{ScriptedRandom, SeededRandom};
use nano_snake::snapshot::BoardSnapshot;
use nano_snake::types::{Coord, Direction, MoveRequest, WireSnake};
use std::sync::Arc;

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

fn snake(id: &str, name: &str, coords: Vec<Coord>) -> WireSnake {
    WireSnake {
        id: id.to_string(),
        name: name.to_string(),
        coords,
        health_points: Some(100),
        taunt: None,
    }
}

fn request(snakes: Vec<WireSnake>, food: Vec<Coord>) -> MoveRequest {
    MoveRequest {
        game_id: "scenario".to_string(),
        turn: 10,
        width: 10,
        height: 10,
        you: "me".to_string(),
        snakes,
        food,
    }
}

fn bot_with_script(script: Vec<usize>) -> Bot {
    Bot::new(Config::default_hardcoded()).with_random(Arc::new(ScriptedRandom::new(script)))
}

/// Head at (5,5), food straight up at (5,2), opponent far away
#[tokio::test]
async fn test_moves_up_toward_food() {
    let req = request(
        vec![
            snake("me", "Nano", vec![c(5, 5), c(5, 6)]),
            snake("them", "Sid", vec![c(0, 9), c(1, 9), c(2, 9)]),
        ],
        vec![c(5, 2)],
    );

    for seed in 0..20 {
        let bot = Bot::new(Config::default_hardcoded()).with_random(Arc::new(SeededRandom::new(seed)));
        let resp = bot.get_move(&req).await;
        assert_eq!(resp.direction, Direction::Up, "seed {}", seed);
        assert_eq!(resp.taunt, "Sid's mother was a garden hose!");
    }
}

/// Head on the left wall: LEFT is never chosen whatever the draw
#[tokio::test]
async fn test_left_wall_never_left() {
    let req = request(
        vec![snake("me", "Nano", vec![c(0, 5), c(0, 6), c(0, 7)])],
        vec![],
    );

    for i in 0..8 {
        let resp = bot_with_script(vec![i]).get_move(&req).await;
        assert_ne!(resp.direction, Direction::Left);
        assert_ne!(resp.direction, Direction::Down, "own neck below");
    }
}

/// Food straight up past an opponent's body: the blocked preference gives way to a safe move
#[tokio::test]
async fn test_blocked_food_direction_falls_back_to_safe_move() {
    let req = request(
        vec![
            snake("me", "Nano", vec![c(0, 5), c(1, 5), c(2, 5)]),
            snake("them", "Sid", vec![c(1, 4), c(0, 4), c(0, 3)]),
        ],
        vec![c(0, 2)],
    );

    for i in 0..4 {
        let resp = bot_with_script(vec![i]).get_move(&req).await;
        assert_eq!(resp.direction, Direction::Down);
        assert_eq!(resp.taunt, "Sid's mother was a garden hose!");
    }
}

/// Coordinates far outside the board must not break the distance comparisons
#[test]
fn test_far_off_board_food_and_opponent_do_not_overflow() {
    let req = request(
        vec![
            snake("me", "Nano", vec![c(5, 5), c(5, 6), c(5, 7)]),
            snake("them", "Sid", vec![c(i32::MAX, i32::MIN)]),
        ],
        vec![c(i32::MIN, 0), c(5, 2)],
    );

    for gate in [nano_snake::config::Gate::Food, nano_snake::config::Gate::Attack].iter() {
        let mut config = Config::default_hardcoded();
        config.strategy.gate = *gate;
        let bot = Bot::new(config).with_random(Arc::new(ScriptedRandom::first()));

        let decision = bot.decide(&req).unwrap();
        assert_ne!(decision.direction, Direction::Down, "own neck below");
    }

    let decision = bot_with_script(vec![0]).decide(&req).unwrap();
    assert_eq!(decision.direction, Direction::Up);
    assert_eq!(decision.selection, Selection::Preferred);
}

/// Surrounded by bodies on all four sides: fallback DOWN with the forced taunt
#[tokio::test]
async fn test_surrounded_returns_fallback() {
    let req = request(
        vec![
            snake(
                "me",
                "Nano",
                vec![
                    c(5, 5),
                    c(5, 6),
                    c(4, 6),
                    c(4, 5),
                    c(4, 4),
                    c(5, 4),
                    c(5, 3),
                ],
            ),
            snake("them", "Sid", vec![c(6, 5), c(7, 5), c(8, 5)]),
        ],
        vec![c(9, 9)],
    );

    for i in 0..4 {
        let resp = bot_with_script(vec![i]).get_move(&req).await;
        assert_eq!(resp.direction, Direction::Down);
        assert_eq!(resp.taunt, "Nooooooo!");
    }
}

/// Already on the food: no preference, so any safe move may come back
#[tokio::test]
async fn test_food_under_head_draws_from_safe_set() {
    let req = MoveRequest {
        width: 7,
        height: 7,
        ..request(
            vec![snake("me", "Nano", vec![c(3, 3), c(3, 4), c(3, 5)])],
            vec![c(3, 3)],
        )
    };

    let board = BoardSnapshot::from_request(&req).unwrap();
    let config = Config::default_hardcoded();

    // Safe set in order: Up, Left, Right
    let expected = [Direction::Up, Direction::Left, Direction::Right];
    for (i, want) in expected.iter().enumerate() {
        let engine = Engine::from_config(&config).with_random(Arc::new(ScriptedRandom::new(vec![i])));
        let decision = engine.decide(&board).unwrap();
        assert_eq!(decision.direction, *want);
        assert_eq!(decision.selection, Selection::Random);
    }
}

/// Identical snapshot and identical seed give identical moves
#[test]
fn test_fixed_seed_is_reproducible() {
    let req = request(
        vec![
            snake("me", "Nano", vec![c(5, 5), c(5, 6), c(5, 7)]),
            snake("a", "A", vec![c(0, 0), c(0, 1)]),
            snake("b", "B", vec![c(9, 9), c(9, 8)]),
        ],
        vec![c(2, 2)],
    );
    let board = BoardSnapshot::from_request(&req).unwrap();
    let config = Config::default_hardcoded();

    let run = || {
        let engine = Engine::from_config(&config).with_random(Arc::new(SeededRandom::new(1234)));
        (0..25)
            .map(|_| engine.decide(&board).unwrap().direction)
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

/// With two opponents the taunt stays generic
#[tokio::test]
async fn test_generic_taunt_in_free_for_all() {
    let req = request(
        vec![
            snake("me", "Nano", vec![c(5, 5), c(5, 6)]),
            snake("a", "A", vec![c(0, 0), c(0, 1)]),
            snake("b", "B", vec![c(9, 9), c(9, 8)]),
        ],
        vec![c(5, 0)],
    );

    let resp = bot_with_script(vec![0]).get_move(&req).await;
    assert_eq!(resp.taunt, "Boo!");
    assert_eq!(resp.direction, Direction::Up);
}

/// A malformed board is answered with the fallback rather than a guess
#[tokio::test]
async fn test_negative_dimensions_fall_back() {
    let req = MoveRequest {
        width: -1,
        ..request(vec![snake("me", "Nano", vec![c(0, 0)])], vec![])
    };

    let bot = bot_with_script(vec![0]);
    assert!(bot.decide(&req).is_err());

    let resp = bot.get_move(&req).await;
    assert_eq!(resp.direction, Direction::Down);
    assert_eq!(resp.taunt, "Nooooooo!");
}

/// The attack gate steers at a shorter opponent instead of food
#[tokio::test]
async fn test_attack_gate_from_config() {
    let mut config = Config::default_hardcoded();
    config.strategy.gate = nano_snake::config::Gate::Attack;
    let bot = Bot::new(config).with_random(Arc::new(ScriptedRandom::first()));

    let req = request(
        vec![
            snake("me", "Nano", vec![c(5, 5), c(5, 6), c(5, 7), c(5, 8)]),
            snake("them", "Sid", vec![c(1, 5), c(0, 5)]),
        ],
        vec![c(9, 5)],
    );

    let resp = bot.get_move(&req).await;
    assert_eq!(resp.direction, Direction::Left);
}
