//! Business Logic Layer: reconstructs Quake3 game matches out of the server log and ranks their players

pub mod game_accumulator;
pub mod log_processor;
pub mod ranking;
mod games_logic;
pub use games_logic::GamesLogic;

pub use bll_api::{Config, GamesLogicApi};
