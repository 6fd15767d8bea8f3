//! Resting place for [GameAccumulator]

use model::game::Game;
use quake3_server_log::{Kill, WORLD};


/// Gathers the statistics of a game match while it is being played.\
/// The accumulator is born open, accepting kills, and [Self::close()] consumes it, handing out the finished [Game]
/// -- which won't change anymore.
///
/// Scoring rules:
///   - every kill counts for the total, regardless of who killed who;
///   - killing another player gives the killer 1 point;
///   - being killed by `<world>` takes 1 point from the victim;
///   - suicides neither give nor take any points.
#[derive(Debug)]
pub struct GameAccumulator {
    game: Game,
}

impl GameAccumulator {

    /// Starts accumulating the game match identified by `id`
    pub fn open<IntoString: Into<String>>(id: IntoString) -> Self {
        Self {
            game: Game::new(id),
        }
    }

    pub fn id(&self) -> &str {
        &self.game.id
    }

    /// Makes `name` a player of this game with a zero score, unless already one.\
    /// `<world>` is never a player
    pub fn register_player(&mut self, name: &str) {
        if name == WORLD || self.game.kills.contains_key(name) {
            return
        }
        self.game.players.push(name.to_owned());
        self.game.kills.insert(name.to_owned(), 0);
    }

    /// Accounts for `kill` -- see the scoring rules in [GameAccumulator]
    pub fn record_kill(&mut self, kill: &Kill) {
        self.game.total_kills += 1;

        // the killer comes first when both are new
        self.register_player(kill.killer);
        self.register_player(kill.victim);

        if kill.is_self_kill() {
            return
        }
        let (scored_player, points) = if kill.is_world_kill() {
            (kill.victim, -1)
        } else {
            (kill.killer, 1)
        };
        if let Some(score) = self.game.kills.get_mut(scored_player) {
            *score += points;
        }
    }

    /// The game match is over
    pub fn close(self) -> Game {
        self.game
    }

}
