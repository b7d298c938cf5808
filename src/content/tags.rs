use chrono::{Local, NaiveDate};

/// Placeholder replaced with the current date.
pub const DATE_TAG: &str = "<cs371date>";

/// Placeholder replaced with the server identity string.
pub const SERVER_TAG: &str = "<cs371server>";

/// Date format used for the date tag.
const DATE_FORMAT: &str = "%m/%d/%Y";

/// Replaces every occurrence of the recognized tags in one line.
///
/// The match is literal and case-sensitive: `<cs371date>` and
/// `<cs371server>` exactly, nothing else. All occurrences in the line are
/// replaced, not just the first. The date is the local date at call time,
/// formatted `MM/DD/YYYY`.
pub fn substitute(line: &str, server_name: &str) -> String {
    substitute_on(line, server_name, Local::now().date_naive())
}

/// Same as [`substitute`], with the date supplied by the caller.
pub fn substitute_on(line: &str, server_name: &str, date: NaiveDate) -> String {
    line.replace(DATE_TAG, &date.format(DATE_FORMAT).to_string())
        .replace(SERVER_TAG, server_name)
}
