use chrono::{DateTime, Local, TimeZone, Utc};

/// Calendar date of `datetime` in the browser's local time zone.
pub fn format_date(datetime: &DateTime<Utc>) -> String {
    format_date_in(datetime, &Local)
}

pub fn format_date_in<Tz: TimeZone>(datetime: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.with_timezone(tz).format("%Y-%m-%d").to_string()
}

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
