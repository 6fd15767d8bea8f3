//! Resting place for [JsonGamesStore]


use dal_api::{GamesStore, StoreError};
use model::game::Game;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use log::debug;


/// [GamesStore] implementation keeping the games in a json file, as an object keyed by the game ids:
/// ```json
/// {
///   "1": {"id": "1", "total_kills": 0, "players": [], "kills": {}},
///   "2": {"id": "2", "total_kills": 5, "players": ["Isgalamido", "Mocinha"], "kills": {"Isgalamido": -2, "Mocinha": 0}}
/// }
/// ```
/// The file is read on every query.
pub struct JsonGamesStore {
    games_file_path: String,
}

impl JsonGamesStore {

    pub fn new<IntoString: Into<String>>(games_file_path: IntoString) -> Self {
        Self {
            games_file_path: games_file_path.into(),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, Game>, StoreError> {
        let contents = fs::read_to_string(&self.games_file_path)
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => StoreError::FileNotFound { path: self.games_file_path.clone() },
                _ => StoreError::Io { path: self.games_file_path.clone(), reason: err.to_string() },
            })?;
        serde_json::from_str(&contents)
            .map_err(|err| StoreError::MalformedContent { path: self.games_file_path.clone(), reason: err.to_string() })
    }

}

impl GamesStore for JsonGamesStore {

    fn save_all(&mut self, games: &[Game]) -> Result<(), StoreError> {
        let games_by_id: BTreeMap<&str, &Game> = games.iter()
            .map(|game| (game.id.as_str(), game))
            .collect();
        let json = serde_json::to_string_pretty(&games_by_id)
            .map_err(|err| StoreError::Io { path: self.games_file_path.clone(), reason: format!("could not serialize games: {err}") })?;
        fs::write(&self.games_file_path, json)
            .map_err(|err| StoreError::Io { path: self.games_file_path.clone(), reason: err.to_string() })?;
        debug!("Saved {} games to '{}'", games_by_id.len(), self.games_file_path);
        Ok(())
    }

    fn all(&self) -> Result<Vec<Game>, StoreError> {
        let mut games: Vec<Game> = self.load()?
            .into_values()
            .collect();
        games.sort_by(|a, b| compare_ids(&a.id, &b.id));
        Ok(games)
    }

    fn by_id(&self, id: &str) -> Result<Game, StoreError> {
        self.load()?
            .remove(id)
            .ok_or_else(|| StoreError::GameNotFound { id: id.to_owned() })
    }

}

/// Numeric ids go first, in numeric order ("2" before "10"); any others follow, in lexicographic order
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
