pub mod config;
pub mod encounter;
pub mod game_loop;
pub mod input;
pub mod loot;
