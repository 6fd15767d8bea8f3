//! Configs that are gathered from the command line -- see [CommandLineOptions]

use structopt::StructOpt;
use strum_macros::{Display, EnumString, EnumVariantNames};
use strum::VariantNames;


/// Command-line options
#[derive(Debug,StructOpt)]
#[structopt(about = "
================================================================
Parses Quake3 Server log files into game matches & ranks their
players by kills.
By default, reads from the file at './qgames.log' and keeps the
parsed games at './games.json'
================================================================
")]
pub struct CommandLineOptions {

    // FLAGS
    ////////

    /// Outputs any non-fatal errors found while reading the log lines to stderr
    #[structopt(long)]
    pub verbose: bool,

    /// Considers all errors as fatal -- even the ones that might be ignored (such as an unreadable log line)
    #[structopt(long)]
    pub pedantic: bool,

    /// Traces every log line read & every dropped kill to stderr
    #[structopt(long)]
    pub debug: bool,


    // COMMANDS
    ///////////

    #[structopt(subcommand)]
    pub command: Command,

}

#[derive(Debug,StructOpt)]
pub enum Command {

    /// Parses a Quake3 Server log file, storing the game matches found there
    Parse {
        /// Input file with Quake3 Server log messages -- `-` reads them from stdin
        #[structopt(long, default_value = DEFAULT_LOG_FILE)]
        log_file: String,

        /// Where to keep the parsed games
        #[structopt(long, default_value = DEFAULT_GAMES_FILE)]
        games_file: String,
    },

    /// Prints the kills ranking for the stored games
    Report {
        /// Where the parsed games are kept
        #[structopt(long, default_value = DEFAULT_GAMES_FILE)]
        games_file: String,

        /// A single ranking for all games or one for each game
        #[structopt(long, default_value = "general", possible_values = ReportScope::VARIANTS)]
        scope: ReportScope,
    },

    /// Prints the stored games as json
    Show {
        /// Where the parsed games are kept
        #[structopt(long, default_value = DEFAULT_GAMES_FILE)]
        games_file: String,

        /// The game to show -- all of them if absent
        #[structopt(long)]
        id: Option<String>,
    },

}

/// Which rankings `report` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumVariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum ReportScope {
    /// All games together
    General,
    /// One ranking for each game, in the order they were played
    PerGame,
}

/// Where Quake3 Server log lines are read from, unless told otherwise
const DEFAULT_LOG_FILE: &str = "./qgames.log";

/// Where parsed games are kept, unless told otherwise
const DEFAULT_GAMES_FILE: &str = "./games.json";

/// Value for `--log-file` that causes the log lines to be read from the standard input
pub const STDIN_LOG_FILE: &str = "-";


pub fn parse_from_args() -> CommandLineOptions {
    CommandLineOptions::from_args()
}
