//! Resting place for [LogLinesSyncReader]


use common::types::Result;
use dal_api::{Config, LogLinesFeed};
use std::{
    io::BufRead,
    pin::Pin,
    sync::Arc,
    task::Poll,
};
use futures::{Stream, stream, StreamExt};
use log::trace;


/// [LogLinesFeed] implementation for reading Quake 3 Server log lines from any `BufRead`
pub struct LogLinesSyncReader<Reader: BufRead> {
    config: Arc<Config>,
    source_name: String,
    reader: Reader,
}

impl<Reader: BufRead> LogLinesSyncReader<Reader> {

    /// `source_name` is used to give context to the reading errors
    pub fn new(config: Arc<Config>, source_name: &str, reader: Reader) -> Box<Self> {
        Box::new(Self {
            config,
            source_name: source_name.into(),
            reader,
        })
    }

}

impl<Reader: BufRead + 'static> LogLinesFeed for LogLinesSyncReader<Reader> {

    fn lines_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<String>>>>> {
        let Self { config, source_name, reader } = *self;
        let mut lines_iter = reader.lines().enumerate();

        let stream = stream::poll_fn(move |_|
            Poll::Ready(lines_iter.next()
                .map(|(line_number, line_result)| line_result
                    .map_err(|read_err| Box::<dyn std::error::Error>::from(format!("IO read error when processing log file '{source_name}' at line {}: {read_err}", line_number+1)))
                )
            )
        );
        let stream: Pin<Box<dyn Stream<Item=Result<String>>>> = if config.debug {
            Box::pin(stream
                .inspect(|line_result| trace!("{line_result:?}")))
        } else {
            Box::pin(stream)
        };
        Ok(stream)
    }

}
