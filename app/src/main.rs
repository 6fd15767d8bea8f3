//! Command line application wiring the layers together:
//!
//! ================================================================
//! Parses Quake3 Server log files into game matches & ranks their
//! players by kills.
//! By default, reads from the file at './qgames.log' and keeps the
//! parsed games at './games.json'
//! ================================================================
//!
//! USAGE:
//!     q3-ranking [FLAGS] <SUBCOMMAND>
//!
//! FLAGS:
//!         --debug       Traces every log line read & every dropped kill to stderr
//!     -h, --help        Prints help information
//!         --pedantic    Considers all errors as fatal -- even the ones that might be ignored (such as an unreadable log line)
//!     -V, --version     Prints version information
//!         --verbose     Outputs any non-fatal errors found while reading the log lines to stderr
//!
//! SUBCOMMANDS:
//!     help      Prints this message or the help of the given subcommand(s)
//!     parse     Parses a Quake3 Server log file, storing the game matches found there
//!     report    Prints the kills ranking for the stored games
//!     show      Prints the stored games as json
//!
//! Explore some execution options:
//!  - ./target/debug/q3-ranking parse --log-file '<path_to_quake3_log_file>'     # parses the log, keeping the games at ./games.json
//!  - cat '<path_to_quake3_log_file>' | ./target/debug/q3-ranking parse --log-file -
//!  - ./target/debug/q3-ranking report                                            # the general ranking
//!  - ./target/debug/q3-ranking report --scope per-game                           # one ranking for each game
//!  - ./target/debug/q3-ranking show --id 2                                       # the stored json for game '2'

mod command_line;

use command_line::{Command, ReportScope, STDIN_LOG_FILE};
use bll::{GamesLogic, GamesLogicApi};
use model::report::RankingReport;
use std::io::{BufWriter, Write};
use std::sync::Arc;
use log::LevelFilter;

/// Buffer to allow efficient output operations
const OUTPUT_BUFFER_SIZE: usize = 1024 * 1024;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    let command_line_options = command_line::parse_from_args();

    // start the logger
    let log_level = if command_line_options.debug {
        LevelFilter::Trace
    } else if command_line_options.verbose {
        LevelFilter::Warn
    } else {
        LevelFilter::Error
    };
    simple_logger::SimpleLogger::new().with_utc_timestamps().with_level(log_level).init().unwrap_or_else(|_| eprintln!("--> LOGGER WAS ALREADY STARTED"));

    let logic_config = bll::Config {
        log_issues: command_line_options.verbose,
        stop_on_feed_errors: command_line_options.pedantic,
    };
    let games_logic = GamesLogic::new(logic_config);
    let mut output = BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, std::io::stdout());

    match command_line_options.command {

        Command::Parse { log_file, games_file } => {
            let dal_config = dal_api::Config {
                log_lines_implementation: if log_file == STDIN_LOG_FILE {
                    dal_api::LogLinesImplementations::StdinReader
                } else {
                    dal_api::LogLinesImplementations::SyncLogFileReader { log_file_path: log_file }
                },
                debug: command_line_options.debug,
            };
            let log_dao = dal::factory::instantiate_log_dao(Arc::new(dal_config));
            let games = games_logic.parse_games(log_dao)?;
            dal::factory::instantiate_games_store(&games_file).save_all(&games)?;
            writeln!(output, "{} games parsed & stored at '{games_file}'", games.len())?;
        },

        Command::Report { games_file, scope } => {
            let games = dal::factory::instantiate_games_store(&games_file).all()?;
            let reports: Vec<RankingReport> = match scope {
                ReportScope::General => vec![games_logic.general_ranking(&games)],
                ReportScope::PerGame => games.iter()
                    .map(|game| games_logic.game_ranking(game))
                    .collect(),
            };
            presentation::write_reports(&presentation::Config::default(), &reports, &mut output)?;
        },

        Command::Show { games_file, id } => {
            let games_store = dal::factory::instantiate_games_store(&games_file);
            let json = match id {
                Some(id) => serde_json::to_string_pretty(&games_store.by_id(&id)?)?,
                None => serde_json::to_string_pretty(&games_store.all()?)?,
            };
            writeln!(output, "{json}")?;
        },

    }

    output.flush()
        .map_err(|err| format!("Couldn't flush the output: {err}"))?;
    Ok(())
}
