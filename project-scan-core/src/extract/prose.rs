//! Description extraction from the first prose run of a document

use regex_utils::heading;

/// Lines joined into a description
const DESCRIPTION_LINES: usize = 3;

/// Collect the first run of prose lines and join the first three
///
/// Title lines and blank lines are skipped without ending the run. A
/// sub-heading or horizontal rule ends the run once it has started; before
/// that it is simply skipped.
pub fn description(text: &str) -> String {
    let mut collected: Vec<&str> = Vec::new();
    let mut started = false;

    for line in text.lines() {
        if heading::is_break(line) {
            if started {
                break;
            }
        } else if !line.trim().is_empty() && !heading::is_heading(line) {
            started = true;
            collected.push(line.trim());
        }
    }

    collected.into_iter().take(DESCRIPTION_LINES).collect::<Vec<_>>().join(" ")
}
