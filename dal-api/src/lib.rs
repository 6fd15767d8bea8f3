//! Contracts for the Data Access Layer: where log lines come from and where parsed games go to

mod config;
pub use config::*;

use common::types::Result;
use model::game::Game;
use std::pin::Pin;
use futures::Stream;
use thiserror::Error;


/// Feed for Quake 3 server log lines
pub trait LogLinesFeed {

    /// Consumes this object, returning a `Stream` which yields the log lines, in order.\
    /// Errors reading a line are yielded in place of the line, so the consumer decides whether to go on or to stop
    fn lines_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<String>>>>>;
}

/// Flat storage for parsed [Game]s
pub trait GamesStore {

    /// Replaces whatever was stored by `games`
    fn save_all(&mut self, games: &[Game]) -> std::result::Result<(), StoreError>;

    /// All stored games, ordered by their ids
    fn all(&self) -> std::result::Result<Vec<Game>, StoreError>;

    /// The game identified by `id`
    fn by_id(&self, id: &str) -> std::result::Result<Game, StoreError>;
}

/// Errors that may happen when accessing a [GamesStore]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("could not find the games file '{path}'")]
    FileNotFound { path: String },

    #[error("could not deserialize the games file '{path}': {reason}")]
    MalformedContent { path: String, reason: String },

    #[error("could not find game '{id}'")]
    GameNotFound { id: String },

    #[error("IO error on the games file '{path}': {reason}")]
    Io { path: String, reason: String },
}
