//! Contains ranking data used to build reports

use std::fmt::{self, Display};


/// What a ranking is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingTitle {
    /// The ranking of a single game match, identified by its id
    Game(String),
    /// The ranking of all game matches together
    General,
}

impl Display for RankingTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingTitle::Game(id) => write!(f, "Game {id}"),
            RankingTitle::General => write!(f, "General Ranking"),
        }
    }
}

/// A player's position on a ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStanding {
    pub name: String,
    /// Net score: kills minus deaths caused by `<world>`
    pub points: i32,
}

/// Everything needed to present a ranking to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingReport {
    pub title: RankingTitle,
    /// Sum of the total kills of all the game matches in the ranking
    pub total_kills: u32,
    /// Best players first -- see `bll::ranking` for the ordering rules
    pub standings: Vec<PlayerStanding>,
}
