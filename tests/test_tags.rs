use chrono::NaiveDate;
use tagserve::content::tags::{self, DATE_TAG, SERVER_TAG};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn test_date_tag_substitution() {
    let out = tags::substitute_on("today is <cs371date>", "srv", date());

    assert_eq!(out, "today is 01/01/2024");
}

#[test]
fn test_server_tag_substitution() {
    let out = tags::substitute_on("served by <cs371server>", "my-server", date());

    assert_eq!(out, "served by my-server");
}

#[test]
fn test_both_tags_in_one_line() {
    let out = tags::substitute_on("Built on <cs371date> by <cs371server>", "my-server", date());

    assert_eq!(out, "Built on 01/01/2024 by my-server");
}

#[test]
fn test_substitution_is_global_within_line() {
    let out = tags::substitute_on("<cs371date><cs371date>", "srv", date());

    assert_eq!(out, "01/01/202401/01/2024");
}

#[test]
fn test_wrong_case_tag_is_left_alone() {
    let out = tags::substitute_on("<cs371Date> and <CS371SERVER>", "srv", date());

    assert_eq!(out, "<cs371Date> and <CS371SERVER>");
}

#[test]
fn test_tag_variants_with_whitespace_not_recognized() {
    let out = tags::substitute_on("< cs371date > <cs371date >", "srv", date());

    assert_eq!(out, "< cs371date > <cs371date >");
}

#[test]
fn test_date_format_zero_padding() {
    let d = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

    assert_eq!(tags::substitute_on(DATE_TAG, "srv", d), "08/07/2026");
}

#[test]
fn test_substitute_uses_current_date() {
    let out = tags::substitute(SERVER_TAG, "srv");
    assert_eq!(out, "srv");

    // The live date path must produce the same MM/DD/YYYY rendering as the
    // fixed-date path for whatever today happens to be.
    let today = chrono::Local::now().date_naive();
    assert_eq!(tags::substitute(DATE_TAG, "srv"), tags::substitute_on(DATE_TAG, "srv", today));
}

#[test]
fn test_empty_line() {
    assert_eq!(tags::substitute_on("", "srv", date()), "");
}
