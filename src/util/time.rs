//! Session timers and relative-time phrases.
//!
//! DESIGN
//! ======
//! Each wall-clock helper has an `_at` twin taking an explicit `now` so the
//! arithmetic is testable. Spans where `end` precedes `start` are not
//! guarded; they produce negative components.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, Datelike, Utc};

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Elapsed time since `start`, as `"{hours}h {minutes}m"`.
pub fn format_duration(start: DateTime<Utc>) -> String {
    format_duration_at(start, Utc::now())
}

/// [`format_duration`] against an explicit `now`.
///
/// Hours are whole hours elapsed; minutes are the remainder after removing
/// them. Both truncate toward zero.
pub fn format_duration_at(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - start;
    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes() % 60;
    format!("{hours}h {minutes}m")
}

/// Whole minutes between `start` and `end`, floored toward negative infinity.
pub fn calculate_session_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_milliseconds().div_euclid(60_000)
}

/// Relative phrase such as `"about 3 hours ago"` or `"in 2 days"`.
pub fn get_time_elapsed(date: DateTime<Utc>) -> String {
    get_time_elapsed_at(date, Utc::now())
}

/// [`get_time_elapsed`] against an explicit `now`.
pub fn get_time_elapsed_at(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let (earlier, later) = if date <= now { (date, now) } else { (now, date) };
    let distance = distance_in_words(earlier, later);
    if date > now { format!("in {distance}") } else { format!("{distance} ago") }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn rounded_div(value: i64, divisor: i64) -> i64 {
    (value as f64 / divisor as f64).round() as i64
}

fn distance_in_words(earlier: DateTime<Utc>, later: DateTime<Utc>) -> String {
    let seconds = (later - earlier).num_seconds();
    let minutes = rounded_div(seconds, 60);

    if minutes < 2 {
        return if minutes == 0 { "less than a minute".to_owned() } else { "1 minute".to_owned() };
    }
    if minutes < 45 {
        return format!("{minutes} minutes");
    }
    if minutes < 90 {
        return "about 1 hour".to_owned();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {} hours", rounded_div(minutes, 60));
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_owned();
    }
    if minutes < MINUTES_IN_MONTH {
        return format!("{} days", rounded_div(minutes, MINUTES_IN_DAY));
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = rounded_div(minutes, MINUTES_IN_MONTH);
        return plural(months, "about 1 month", "about {} months");
    }

    let months = calendar_months_between(earlier, later);
    if months < 12 {
        return plural(rounded_div(minutes, MINUTES_IN_MONTH), "1 month", "{} months");
    }
    let years = months / 12;
    match months % 12 {
        0..3 => plural(years, "about 1 year", "about {} years"),
        3..9 => plural(years, "over 1 year", "over {} years"),
        _ => plural(years + 1, "almost 1 year", "almost {} years"),
    }
}

fn plural(count: i64, one: &str, other: &str) -> String {
    if count == 1 { one.to_owned() } else { other.replace("{}", &count.to_string()) }
}

/// Full calendar months from `earlier` to `later`.
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    if months > 0 && (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months
}
