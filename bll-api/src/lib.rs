//! Contract for the Business Logic Layer: turning log lines into games & games into rankings

mod config;
pub use config::*;

use common::types::Result;
use dal_api::LogLinesFeed;
use model::{
    game::Game,
    report::RankingReport,
};
use std::sync::Arc;


pub trait GamesLogicApi {

    /// Creates a new instance
    fn new<IntoArcConfig: Into<Arc<Config>>>(config: IntoArcConfig) -> Self where Self: Sized;

    /// Consumes all the lines in `log_dao`, reconstructing the [Game]s found there, in the order they were played
    fn parse_games(&self, log_dao: Box<dyn LogLinesFeed>) -> Result<Vec<Game>>;

    /// Builds the ranking for a single game match
    fn game_ranking(&self, game: &Game) -> RankingReport;

    /// Builds the ranking for all `games` together
    fn general_ranking(&self, games: &[Game]) -> RankingReport;

}
