//! Small crate to be a central point for presentation requisites.
//!
//! Renders [RankingReport]s as fixed width text tables:
//! ```text
//! Game 1                              Total Kills: 5
//! Position | Player                         | Points
//!        1 | player two                     | 3
//!        2 | player one                     | 2
//! ```

mod config;
pub use config::Config;

use model::report::RankingReport;
use std::io::Write;
use log::debug;


/// Renders `report` as text: the title line, the table header and one line per player, best first.\
/// There is no line break after the last player.
pub fn render(config: &Config, report: &RankingReport) -> String {
    format!("{}\n{}", title_line(config, report), ranking_table(config, report))
}

/// Writes each one of `reports`, separated by an empty line
pub fn write_reports<'a>(config: &Config, reports: impl IntoIterator<Item=&'a RankingReport>, mut writer: impl Write) -> Result<(), Box<dyn std::error::Error>> {

    let mut write = |text: &str|
        writer.write_all(text.as_bytes())
            .map_err(|err| format!("presentation: write_reports(): Error writing the ranking report to the given `writer`: {err}"));

    let mut count = 0;
    for report in reports {
        if count > 0 {
            write("\n\n")?;
        }
        write(&render(config, report))?;
        count += 1;
    }
    if count > 0 {
        write("\n")?;
    }
    debug!("presentation: write_reports(): {count} ranking report(s) written");
    Ok(())
}

/// `title` on the left, `Total Kills: n` right-justified up to [Config::line_width].
/// Titles too long for that simply get the label right after them
fn title_line(config: &Config, report: &RankingReport) -> String {
    let title = report.title.to_string();
    let total_kills = format!("Total Kills: {}", report.total_kills);
    let label_width = config.line_width.saturating_sub(title.chars().count());
    format!("{title}{total_kills:>label_width$}")
}

/// The table header followed by the ranked players
fn ranking_table(config: &Config, report: &RankingReport) -> String {
    let position_width = config.position_width;
    let name_width = config.name_width;
    let header = format!("{:<position_width$} | {:<name_width$} | Points", "Position", "Player");
    let body = report.standings.iter()
        .enumerate()
        .map(|(index, standing)| format!("{:>position_width$} | {:<name_width$} | {}", index+1, standing.name, standing.points))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{header}\n{body}")
}
