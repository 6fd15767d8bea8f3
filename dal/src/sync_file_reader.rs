//! Resting place for [LogFileSyncReader]


use crate::sync_reader::LogLinesSyncReader;
use common::types::Result;
use dal_api::{Config, LogLinesFeed};
use std::fs::File;
use std::io::BufReader;
use std::pin::Pin;
use std::sync::Arc;
use futures::Stream;


/// Size for buffering IO (the larger, more RAM is used, but fewer system calls / context switches / hardware requests are required)
const BUFFER_SIZE: usize = 1024*1024;


/// [LogLinesFeed] implementation for reading Quake 3 Server log lines from a log file
pub struct LogFileSyncReader {
    config: Arc<Config>,
    log_file_path: String,
}

impl LogFileSyncReader {

    pub fn new<IntoString: Into<String>>(config: Arc<Config>, log_file_path: IntoString) -> Box<Self> {
        Box::new(Self {
            config,
            log_file_path: log_file_path.into(),
        })
    }

}

impl LogLinesFeed for LogFileSyncReader {

    fn lines_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<String>>>>> {
        let file = File::open(&self.log_file_path)
            .map_err(|err| format!("Couldn't open Quake3 Server log file '{}' for reading: {err}", self.log_file_path))?;
        let reader = BufReader::with_capacity(BUFFER_SIZE, file);
        LogLinesSyncReader::new(self.config, &self.log_file_path, reader)
            .lines_stream()
    }

}
