//! Resting place for DAL's [Config] & friends

/// Configuration for the DAL crate
pub struct Config {

    /// The implementation to use when getting a Data Access Object (DAO) instance for the log lines
    pub log_lines_implementation: LogLinesImplementations,

    /// If true, every line read is traced through `log::trace!`
    pub debug: bool,

}

/// The available sources of Quake3 Server log lines
#[derive(Debug, Clone, PartialEq)]
pub enum LogLinesImplementations {
    /// Reads a complete log file
    SyncLogFileReader { log_file_path: String },
    /// Reads whatever is piped into the process
    StdinReader,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_lines_implementation: LogLinesImplementations::SyncLogFileReader { log_file_path: String::from("./qgames.log") },
            debug: false,
        }
    }
}
