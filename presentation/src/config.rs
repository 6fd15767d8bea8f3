//! Resting place for Presentation's [Config]

/// Configuration for the Presentation crate: the geometry of the ranking tables
pub struct Config {

    /// The width of the title line -- `Total Kills: n` is right-justified to end at this column
    pub line_width: usize,

    /// Player names shorter than this are padded with spaces. Longer names are never truncated
    pub name_width: usize,

    /// Width of the right-aligned position column
    pub position_width: usize,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_width: 50,
            name_width: 30,
            position_width: 8,
        }
    }
}
