mod game_loop;
mod input;

pub use game_loop::run_game;
