use super::*;
use chrono::{Duration, TimeZone};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 18, 30, 0).unwrap()
}

// =============================================================
// format_duration
// =============================================================

#[test]
fn format_duration_splits_hours_and_minutes() {
    let now = base();
    assert_eq!(format_duration_at(now - Duration::minutes(125), now), "2h 5m");
    assert_eq!(format_duration_at(now - Duration::minutes(59), now), "0h 59m");
    assert_eq!(format_duration_at(now, now), "0h 0m");
}

#[test]
fn format_duration_ignores_partial_minutes() {
    let now = base();
    assert_eq!(format_duration_at(now - Duration::seconds(61 * 60 + 59), now), "1h 1m");
}

#[test]
fn format_duration_with_future_start_is_negative() {
    let now = base();
    assert_eq!(format_duration_at(now + Duration::minutes(125), now), "-2h -5m");
}

#[test]
fn format_duration_uses_wall_clock() {
    let start = Utc::now() - Duration::minutes(125);
    let rendered = format_duration(start);
    assert!(rendered == "2h 5m" || rendered == "2h 6m", "got {rendered}");
}

// =============================================================
// calculate_session_duration
// =============================================================

#[test]
fn session_duration_floors_partial_minutes() {
    let t = base();
    assert_eq!(calculate_session_duration(t, t + Duration::seconds(90)), 1);
    assert_eq!(calculate_session_duration(t, t + Duration::seconds(59)), 0);
    assert_eq!(calculate_session_duration(t, t + Duration::hours(3)), 180);
}

#[test]
fn session_duration_floors_negative_spans_downward() {
    let t = base();
    assert_eq!(calculate_session_duration(t, t - Duration::seconds(60)), -1);
    assert_eq!(calculate_session_duration(t, t - Duration::seconds(30)), -1);
    assert_eq!(calculate_session_duration(t, t - Duration::seconds(90)), -2);
}

// =============================================================
// get_time_elapsed
// =============================================================

#[test]
fn time_elapsed_small_spans() {
    let now = base();
    assert_eq!(get_time_elapsed_at(now - Duration::seconds(20), now), "less than a minute ago");
    assert_eq!(get_time_elapsed_at(now - Duration::seconds(70), now), "1 minute ago");
    assert_eq!(get_time_elapsed_at(now - Duration::minutes(12), now), "12 minutes ago");
}

#[test]
fn time_elapsed_hours_and_days() {
    let now = base();
    assert_eq!(get_time_elapsed_at(now - Duration::minutes(60), now), "about 1 hour ago");
    assert_eq!(get_time_elapsed_at(now - Duration::hours(3), now), "about 3 hours ago");
    assert_eq!(get_time_elapsed_at(now - Duration::hours(30), now), "1 day ago");
    assert_eq!(get_time_elapsed_at(now - Duration::days(5), now), "5 days ago");
}

#[test]
fn time_elapsed_months_and_years() {
    let now = base();
    assert_eq!(get_time_elapsed_at(now - Duration::days(35), now), "about 1 month ago");
    assert_eq!(get_time_elapsed_at(now - Duration::days(125), now), "4 months ago");
    assert_eq!(
        get_time_elapsed_at(Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap(), now),
        "about 1 year ago"
    );
    assert_eq!(
        get_time_elapsed_at(Utc.with_ymd_and_hms(2022, 9, 1, 0, 0, 0).unwrap(), now),
        "over 1 year ago"
    );
    assert_eq!(
        get_time_elapsed_at(Utc.with_ymd_and_hms(2022, 5, 1, 0, 0, 0).unwrap(), now),
        "almost 2 years ago"
    );
}

#[test]
fn time_elapsed_future_dates_use_in_prefix() {
    let now = base();
    assert_eq!(get_time_elapsed_at(now + Duration::days(2), now), "in 2 days");
}

#[test]
fn time_elapsed_wall_clock_is_non_empty() {
    assert!(get_time_elapsed(Utc::now() - Duration::hours(2)).ends_with(" ago"));
}
