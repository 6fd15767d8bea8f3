//! Resting place for [LogProcessor]

use crate::game_accumulator::GameAccumulator;
use model::game::Game;
use quake3_server_log::{as_kill, is_game_start};
use log::debug;


/// Reconstructs the [Game]s out of the ordered lines of a Quake3 server log.\
/// A game match starts at an `InitGame` line and lasts until the next one -- or until the log ends.
/// Kills go to the game being played; lines that are neither game starts nor kills change nothing.
///
/// Games are numbered "1", "2", ... in the order they started.
#[derive(Debug)]
pub struct LogProcessor {
    current_game: Option<GameAccumulator>,
    next_game_id: u32,
    games: Vec<Game>,
}

impl LogProcessor {

    pub fn new() -> Self {
        Self {
            current_game: None,
            next_game_id: 1,
            games: Vec::new(),
        }
    }

    /// Processes all `log_lines` at once
    pub fn process<Lines, Line>(log_lines: Lines) -> Vec<Game>
                               where Lines: IntoIterator<Item=Line>,
                                     Line: AsRef<str> {
        let mut processor = Self::new();
        for log_line in log_lines {
            processor.feed_line(log_line.as_ref());
        }
        processor.finish()
    }

    /// Advances the processing with the next line of the log
    pub fn feed_line(&mut self, log_line: &str) {
        if is_game_start(log_line) {
            let new_game = GameAccumulator::open(self.next_game_id.to_string());
            self.next_game_id += 1;
            if let Some(finished_game) = self.current_game.replace(new_game) {
                self.games.push(finished_game.close());
            }
        }
        if let Some(kill) = as_kill(log_line) {
            match self.current_game {
                Some(ref mut current_game) => current_game.record_kill(&kill),
                None => debug!("Dropping {kill:?}: no game match was started yet"),
            }
        }
    }

    /// The log is over: closes the game being played, if any, and returns all games, in the order they were played
    pub fn finish(mut self) -> Vec<Game> {
        if let Some(last_game) = self.current_game.take() {
            self.games.push(last_game.close());
        }
        self.games
    }

}

impl Default for LogProcessor {
    fn default() -> Self {
        Self::new()
    }
}


/// Unit tests for the [log_processor](super) module
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;


    const INIT_GAME: &str = r#"  0:00 InitGame: \sv_floodProtect\1\sv_maxPing\0\sv_minPing\0\sv_maxRate\10000\sv_minRate\0\sv_hostname\Code Miner Server\g_gametype\0\sv_privateClients\2\sv_maxclients\16\sv_allowDownload\0\dmflags\0\fraglimit\20\timelimit\15\g_maxGameClients\0\capturelimit\8\version\ioq3 1.36 linux-x86_64 Apr 12 2009\protocol\68\mapname\q3dm17\gamename\baseq3\g_needpass\0"#;


    /// A game with no kills is still a game
    #[test]
    fn game_without_kills() {
        let log_lines = [
            INIT_GAME,
            r#" 15:00 Exit: Timelimit hit."#,
            r#" 20:37 ShutdownGame:"#,
        ];
        assert_games(&log_lines, vec![
            game("1", 0, &[]),
        ]);
    }

    #[test]
    fn world_player_and_self_kills() {
        let log_lines = [
            INIT_GAME,
            r#" 20:38 ClientConnect: 2"#,
            r#" 20:38 ClientUserinfoChanged: 2 n\Isgalamido\t\0\model\uriel/zael\hmodel\uriel/zael\g_redteam\\g_blueteam\\c1\5\c2\5\hc\100\w\0\l\0\tt\0\tl\0"#,
            r#" 20:54 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT"#,
            r#" 21:07 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT"#,
            r#" 21:42 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT"#,
            r#" 22:04 Item: 2 ammo_rockets"#,
            r#" 22:06 Kill: 2 3 7: Isgalamido killed Mocinha by MOD_ROCKET_SPLASH"#,
            r#" 22:11 ClientDisconnect: 3"#,
            r#" 22:18 Kill: 2 2 7: Isgalamido killed Isgalamido by MOD_ROCKET_SPLASH"#,
        ];
        assert_games(&log_lines, vec![
            game("1", 5, &[("Isgalamido", -2), ("Mocinha", 0)]),
        ]);
    }

    /// Games are numbered in the order they start and each one has its own players & scores
    #[test]
    fn many_games() {
        let log_lines = [
            INIT_GAME,
            r#"  1:00 Kill: 2 3 7: Isgalamido killed Mocinha by MOD_ROCKET_SPLASH"#,
            r#"  1:47 ShutdownGame:"#,
            r#"  1:47 ------------------------------------------------------------"#,
            INIT_GAME,
            r#"  2:00 Kill: 3 2 6: Dono da Bola killed Zeh by MOD_ROCKET"#,
            r#"  2:10 Kill: 1022 3 22: <world> killed Dono da Bola by MOD_FALLING"#,
            INIT_GAME,
        ];
        assert_games(&log_lines, vec![
            game("1", 1, &[("Isgalamido", 1), ("Mocinha", 0)]),
            game("2", 2, &[("Dono da Bola", 0), ("Zeh", 0)]),
            game("3", 0, &[]),
        ]);
    }

    /// Kills before the first game are silently dropped
    #[test]
    fn kills_before_any_game() {
        let log_lines = [
            r#"  0:01 Kill: 2 3 7: Isgalamido killed Mocinha by MOD_ROCKET_SPLASH"#,
            INIT_GAME,
            r#"  1:00 Kill: 3 2 7: Mocinha killed Isgalamido by MOD_ROCKET_SPLASH"#,
        ];
        assert_games(&log_lines, vec![
            game("1", 1, &[("Mocinha", 1), ("Isgalamido", 0)]),
        ]);
    }

    /// No game starts, no games
    #[test]
    fn no_games() {
        assert_games(&[], vec![]);
        assert_games(&[
            r#"  0:01 Kill: 2 3 7: Isgalamido killed Mocinha by MOD_ROCKET_SPLASH"#,
            r#" 20:34 ClientConnect: 2"#,
            r#""#,
        ], vec![]);
    }

    /// Feeding line by line is the same as processing all lines at once
    #[test]
    fn incremental_feeding() {
        let log_lines = [
            INIT_GAME,
            r#"  2:00 Kill: 3 2 6: Dono da Bola killed Zeh by MOD_ROCKET"#,
            INIT_GAME,
            r#"  2:10 Kill: 1022 3 22: <world> killed Dono da Bola by MOD_FALLING"#,
        ];
        let mut processor = LogProcessor::default();
        for log_line in log_lines {
            processor.feed_line(log_line);
        }
        assert_eq!(processor.finish(), LogProcessor::process(log_lines), "Incremental & batch processing differ");
    }


    fn game(id: &str, total_kills: u32, scores: &[(&str, i32)]) -> Game {
        Game {
            id: id.to_owned(),
            total_kills,
            players: scores.iter().map(|(name, _)| name.to_string()).collect(),
            kills: scores.iter().map(|(name, score)| (name.to_string(), *score)).collect::<BTreeMap<_, _>>(),
        }
    }

    fn assert_games(log_lines: &[&str], expected_games: Vec<Game>) {
        let games = LogProcessor::process(log_lines);
        assert_eq!(games, expected_games, "Games don't match");
    }

}
