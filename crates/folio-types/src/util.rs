use chrono::{Datelike, NaiveDate};

/// Parse the leading `YYYY-MM-DD` of a date string.
///
/// Only the zero-padded form is accepted, since catalog ordering compares
/// dates as strings. A time part may follow after `T` or a space.
pub fn parse_sortable_date(date: &str) -> Option<NaiveDate> {
    let bytes = date.as_bytes();
    if bytes.len() < 10 {
        return None;
    }

    if bytes.len() > 10 && bytes[10] != b'T' && bytes[10] != b' ' {
        return None;
    }

    let shape_ok = bytes[..10].iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }

    NaiveDate::parse_from_str(&date[..10], "%Y-%m-%d").ok()
}

/// Calendar year of a sortable date string
pub fn year_of(date: &str) -> Option<i32> {
    parse_sortable_date(date).map(|d| d.year())
}

/// Current calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
