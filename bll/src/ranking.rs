//! Resting place for [Ranking]

use model::{
    game::Game,
    report::{PlayerStanding, RankingReport, RankingTitle},
};
use std::collections::HashMap;


/// Accumulates the points of the players along any number of [Game]s.\
/// Folding the same game twice counts it twice.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ranking {
    total_kills: u32,
    /// NOTE: the iteration order of this map must never reach the outside -- see [Self::ordered()]
    points: HashMap<String, i32>,
}

impl Ranking {

    pub fn new() -> Self {
        Self::default()
    }

    /// The ranking of a single game match
    pub fn for_game(game: &Game) -> RankingReport {
        let mut ranking = Self::new();
        ranking.add_game(game);
        ranking.into_report(RankingTitle::Game(game.id.clone()))
    }

    /// The general ranking, for all `games` together
    pub fn for_games<'a>(games: impl IntoIterator<Item=&'a Game>) -> RankingReport {
        let mut ranking = Self::new();
        for game in games {
            ranking.add_game(game);
        }
        ranking.into_report(RankingTitle::General)
    }

    /// Adds the total kills & the players' scores of `game`
    pub fn add_game(&mut self, game: &Game) {
        self.total_kills += game.total_kills;
        for (player, score) in &game.kills {
            *self.points.entry(player.to_owned()).or_insert(0) += score;
        }
    }

    /// Folds in a partial ranking -- built, for instance, out of another log file
    pub fn merge(&mut self, other: Ranking) {
        self.total_kills += other.total_kills;
        for (player, points) in other.points {
            *self.points.entry(player).or_insert(0) += points;
        }
    }

    pub fn total_kills(&self) -> u32 {
        self.total_kills
    }

    pub fn points_of(&self, player: &str) -> Option<i32> {
        self.points.get(player).copied()
    }

    /// The players, best first: more points go first and, on ties, names are in alphabetical order.\
    /// As names are unique, no two players ever tie on both criteria -- the order is always the same,
    /// regardless of the order games were added in
    pub fn ordered(&self) -> Vec<PlayerStanding> {
        let mut standings: Vec<PlayerStanding> = self.points.iter()
            .map(|(name, points)| PlayerStanding { name: name.to_owned(), points: *points })
            .collect();
        standings.sort_unstable_by(|a, b| b.points.cmp(&a.points)
            .then_with(|| a.name.cmp(&b.name)));
        standings
    }

    pub fn into_report(self, title: RankingTitle) -> RankingReport {
        RankingReport {
            title,
            total_kills: self.total_kills,
            standings: self.ordered(),
        }
    }

}
