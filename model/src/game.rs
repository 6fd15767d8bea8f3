//! Resting place for [Game]

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};


/// A completed Quake3 game match, as reconstructed from the server logs.\
/// Its serialized form -- `{"id", "total_kills", "players", "kills"}` -- is the contract for the stored games.
///
/// Invariant: [Self::players] & [Self::kills] always share the same set of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Sequential identifier given in the order the matches were found in the log: "1", "2", ...
    pub id: String,
    /// Every death counts -- including the ones caused by `<world>` and suicides
    pub total_kills: u32,
    /// Players, in the order they first appeared in a kill (either as killer or victim)
    pub players: Vec<String>,
    /// The score for each of the [Self::players] -- negative when `<world>` killed the player more times than the player killed others
    pub kills: BTreeMap<String, i32>,
}

impl Game {

    /// A game match with no deaths & no players
    pub fn new<IntoString: Into<String>>(id: IntoString) -> Self {
        Self {
            id: id.into(),
            total_kills: 0,
            players: Vec::new(),
            kills: BTreeMap::new(),
        }
    }

    /// The score of `player`, if that player took part on this match
    pub fn score_of(&self, player: &str) -> Option<i32> {
        self.kills.get(player).copied()
    }

}
