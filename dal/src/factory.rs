//! Factory for obtaining one of the implementations of our DAO objects

use crate::json_games_store::JsonGamesStore;
use crate::sync_file_reader::LogFileSyncReader;
use crate::stdin_reader::LogStdinReader;
use dal_api::{Config, GamesStore, LogLinesFeed, LogLinesImplementations};
use std::sync::Arc;

/// Instantiates a Data Access Object (dao) able to feed Quake3 server log lines,
/// from the source dictated by [Config::log_lines_implementation]
pub fn instantiate_log_dao(config: Arc<Config>) -> Box<dyn LogLinesFeed> {
    match &config.log_lines_implementation {
        LogLinesImplementations::SyncLogFileReader { log_file_path } => LogFileSyncReader::new(Arc::clone(&config), log_file_path.as_str()),
        LogLinesImplementations::StdinReader => LogStdinReader::new(Arc::clone(&config)),
    }
}

/// Instantiates the store for the parsed games, kept at `games_file_path`
pub fn instantiate_games_store(games_file_path: &str) -> Box<dyn GamesStore> {
    Box::new(JsonGamesStore::new(games_file_path))
}
