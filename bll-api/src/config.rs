//! Resting place for BLL's [Config]


/// Configuration to dictate the tunable behaviors of the Business Logic Layer
pub struct Config {

    /// Log::warn! of any errors that happen while reading the log lines.\
    /// If [Self::stop_on_feed_errors] is set to false, feed errors won't cause the processor to stop.
    /// With this setting, you have the option to visualize any issues.
    pub log_issues: bool,

    /// If false, ignore any log lines feed errors -- such as IO errors, non UTF-8 lines.\
    /// If true, causes the error to propagate and the processor to stop.
    pub stop_on_feed_errors: bool,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_issues: false,
            stop_on_feed_errors: false,
        }
    }
}
