//! Data Access Layer: implementations for the contracts in `dal-api`

pub mod factory;
pub mod sync_reader;
pub mod sync_file_reader;
pub mod stdin_reader;
pub mod json_games_store;
