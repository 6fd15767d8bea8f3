//! Small library to make sense of Quake 3 server log lines.
//!
//! Only two kinds of lines matter here: the ones starting a new game match (`InitGame`)
//! and the ones reporting a death (`Kill`). Every other line is inert -- see [classifier].

pub mod model;
pub mod classifier;

pub use model::{Kill, WORLD};
pub use classifier::{is_game_start, as_kill};
