//! Resting place for [Kill] & friends


/// The name Quake3 uses as the killer when no player is to blame for a death -- falls, lava, traps, ...\
/// It is never a player: it doesn't score and it is never listed.
pub const WORLD: &str = "<world>";

/// Mapping for the data of a Quake 3 server `Kill` log line we care about.\
/// Names are borrowed from the log line that originated the event, as kills are consumed right after being classified.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Kill<'a> {
    /// Who did the killing -- possibly [WORLD]
    pub killer: &'a str,
    /// Who died
    pub victim: &'a str,
}

impl Kill<'_> {

    /// Returns true if the death was caused by the environment rather than by a player
    pub fn is_world_kill(&self) -> bool {
        self.killer == WORLD
    }

    /// Returns true if the killer is also the victim -- rocket splash, grenades, ...
    pub fn is_self_kill(&self) -> bool {
        self.killer == self.victim
    }

}
