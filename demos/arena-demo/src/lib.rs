use wasm_bindgen::prelude::*;
use arena_engine::*;

mod game;
use game::ArenaDemo;

arena_web::export_game!(ArenaDemo, "arena-demo");
