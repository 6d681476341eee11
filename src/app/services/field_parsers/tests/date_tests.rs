//! Tests for `date_added` and `release_year` parsing

use super::super::date::{parse_date_added, parse_release_year};
use chrono::{Datelike, NaiveDate};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_parse_long_form_dates() {
    let parsed = parse_date_added(Some("September 9, 2019")).unwrap();
    assert_eq!(parsed.year(), 2019);
    assert_eq!(parsed, ymd(2019, 9, 9));

    // Leading whitespace is common in the catalog export
    assert_eq!(
        parse_date_added(Some(" August 4, 2017")),
        Some(ymd(2017, 8, 4))
    );
    assert_eq!(
        parse_date_added(Some("December  31,   2020")),
        Some(ymd(2020, 12, 31))
    );
    assert_eq!(parse_date_added(Some("Sep 9, 2019")), Some(ymd(2019, 9, 9)));
    assert_eq!(
        parse_date_added(Some("9 September 2019")),
        Some(ymd(2019, 9, 9))
    );
}

#[test]
fn test_parse_iso_dates() {
    let parsed = parse_date_added(Some("2018-04-05")).unwrap();
    assert_eq!(parsed.year(), 2018);
    assert_eq!(parsed, ymd(2018, 4, 5));

    assert_eq!(
        parse_date_added(Some("2018-04-05 13:45:00")),
        Some(ymd(2018, 4, 5))
    );
    assert_eq!(
        parse_date_added(Some("2018-04-05T13:45:00")),
        Some(ymd(2018, 4, 5))
    );
    assert_eq!(
        parse_date_added(Some("2018-04-05T13:45:00+02:00")),
        Some(ymd(2018, 4, 5))
    );
    assert_eq!(parse_date_added(Some("2018/04/05")), Some(ymd(2018, 4, 5)));
}

#[test]
fn test_parse_partial_dates() {
    assert_eq!(
        parse_date_added(Some("September 2019")),
        Some(ymd(2019, 9, 1))
    );
    assert_eq!(parse_date_added(Some("2019-09")), Some(ymd(2019, 9, 1)));
    assert_eq!(parse_date_added(Some("2019")), Some(ymd(2019, 1, 1)));
}

#[test]
fn test_unparseable_dates_are_absent() {
    assert_eq!(parse_date_added(Some("not a date")), None);
    assert_eq!(parse_date_added(Some("2019-13-45")), None);
    assert_eq!(parse_date_added(Some("February 30, 2020")), None);
    assert_eq!(parse_date_added(Some("20190")), None);
}

#[test]
fn test_null_tokens_are_absent() {
    assert_eq!(parse_date_added(None), None);
    for token in ["", "   ", "nan", "NaN", "None", "NULL", " null "] {
        assert_eq!(parse_date_added(Some(token)), None, "token {token:?}");
    }
}

#[test]
fn test_parse_release_year() {
    assert_eq!(parse_release_year(Some("2019")), Some(2019));
    assert_eq!(parse_release_year(Some(" 1998 ")), Some(1998));
    assert_eq!(parse_release_year(Some("2019.0")), Some(2019));
    assert_eq!(parse_release_year(Some("2019.5")), None);
    assert_eq!(parse_release_year(Some("unknown")), None);
    assert_eq!(parse_release_year(Some("")), None);
    assert_eq!(parse_release_year(Some("inf")), None);
    assert_eq!(parse_release_year(None), None);
}
