//! Business entities shared by all layers: the parsed [game::Game]s and the [report::RankingReport]s built out of them

pub mod game;
pub mod report;
