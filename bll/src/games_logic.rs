//! Resting place for [GamesLogic], the [GamesLogicApi] implementation

use crate::{
    log_processor::LogProcessor,
    ranking::Ranking,
};
use bll_api::{Config, GamesLogicApi};
use common::types::Result;
use dal_api::LogLinesFeed;
use model::{
    game::Game,
    report::RankingReport,
};
use std::sync::Arc;
use futures::StreamExt;
use log::warn;


pub struct GamesLogic {
    config: Arc<Config>,
}

impl GamesLogicApi for GamesLogic {

    fn new<IntoArcConfig: Into<Arc<Config>>>(config: IntoArcConfig) -> Self {
        Self {
            config: config.into(),
        }
    }

    fn parse_games(&self, log_dao: Box<dyn LogLinesFeed>) -> Result<Vec<Game>> {

        let stream = log_dao.lines_stream()
            .map_err(|err| format!("parse_games(): failed at fetching the log lines `Stream`: {err}"))?;

        let config = Arc::clone(&self.config);
        let stream = stream.enumerate()
            .inspect(move |(line_index, line_result)| if config.log_issues {
                if let Err(err) = line_result {
                    warn!("Failed to read log line #{}: {err}", line_index+1);
                }
            });

        let mut log_processor = LogProcessor::new();
        for (line_index, line_result) in futures::executor::block_on_stream(stream) {
            match line_result {
                Ok(log_line) => log_processor.feed_line(&log_line),
                Err(feed_err) if self.config.stop_on_feed_errors =>
                    return Err(Box::from(format!("parse_games(): feed error at log line #{}: {feed_err}", line_index+1))),
                Err(_) => (),
            }
        }
        Ok(log_processor.finish())
    }

    fn game_ranking(&self, game: &Game) -> RankingReport {
        Ranking::for_game(game)
    }

    fn general_ranking(&self, games: &[Game]) -> RankingReport {
        Ranking::for_games(games)
    }

}
