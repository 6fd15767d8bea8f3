//! Stateless classification of Quake 3 server log lines.
//!
//! Lines are tested against two signatures, each one with its own precompiled [Regex]:
//!   1) `InitGame:` -- a new game match has started;
//!   2) `Kill: <ids>: <KILLER_NAME> killed <VICTIM_NAME> by <MEAN_OF_DEATH>` -- someone died.
//!
//! Both checks are independent from each other. Any line matching none of them (connects, items, says,
//! scores, separators, ...) carries no information for us and is simply not recognized -- never an error.
//!
//! See also `benches/classification_strategies.rs` for the trade-offs between `Regex` & `str::split*()` here.

use crate::model::Kill;
use once_cell::sync::Lazy;
use regex::Regex;


static GAME_START_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:^|\s)InitGame:"#)
        .expect("GAME_START_REGEX compilation failed")
});

/// Names are captured greedily -- they may contain spaces and any other chars -- but the `" killed "` & `" by"`
/// delimiters are matched at their last possible occurrences
static KILL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#".*Kill:.*: (?P<killer>.*) killed (?P<victim>.*) by.*"#)
        .expect("KILL_REGEX compilation failed")
});


/// Returns true if `log_line` signals the beginning of a new game match
pub fn is_game_start(log_line: &str) -> bool {
    GAME_START_REGEX.is_match(log_line)
}

/// Extracts the killer & victim out of `log_line`, provided it is a `Kill` line.\
/// Returns `None` for any other line
pub fn as_kill(log_line: &str) -> Option<Kill<'_>> {
    let captures = KILL_REGEX.captures(log_line)?;
    Some(Kill {
        killer: captures.name("killer")?.as_str(),
        victim: captures.name("victim")?.as_str(),
    })
}
