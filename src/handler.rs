// HTTP handler bindings for Battlesnake API endpoints
//
// This module provides thin wrapper functions that bind Rocket HTTP routes
// to the Bot's methods. Handlers are responsible for:
// - Deserializing incoming JSON requests
// - Extracting Bot instance from Rocket's managed state
// - Delegating to Bot methods
// - Serializing responses

use rocket::serde::json::Json;
use serde_json::Value;

use nano_snake::bot::Bot;
use nano_snake::types::{MoveRequest, MoveResponse, StartRequest, StartResponse};

/// GET / endpoint
/// Returns bot metadata and appearance configuration
#[get("/")]
pub fn index(bot: &rocket::State<Bot>) -> Json<Value> {
    Json(bot.info())
}

/// POST /start endpoint
/// Returns the snake's identity for this game
#[post("/start", format = "json", data = "<start_req>")]
pub fn start(bot: &rocket::State<Bot>, start_req: Json<StartRequest>) -> Json<StartResponse> {
    Json(bot.start(&start_req))
}

/// POST /move endpoint
/// Called each turn to compute and return the next move
#[post("/move", format = "json", data = "<move_req>")]
pub async fn get_move(bot: &rocket::State<Bot>, move_req: Json<MoveRequest>) -> Json<MoveResponse> {
    Json(bot.get_move(&move_req).await)
}

/// POST /end endpoint
/// Acknowledges the end of a game with an empty object
#[post("/end")]
pub fn end(bot: &rocket::State<Bot>) -> Json<Value> {
    Json(bot.end())
}
