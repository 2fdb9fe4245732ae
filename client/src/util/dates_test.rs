use time::macros::datetime;

use super::*;
use crate::net::types::Role;

fn make_user(created_at: Option<&str>, last_login_at: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        role: Role::User,
        created_at: created_at.map(str::to_owned),
        updated_at: None,
        last_login_at: last_login_at.map(str::to_owned),
    }
}

const NOW: OffsetDateTime = datetime!(2024-06-30 12:00 UTC);

#[test]
fn parses_fractional_utc_timestamps() {
    assert_eq!(parse_timestamp("2024-01-10T12:00:00.000Z"), Some(datetime!(2024-01-10 12:00 UTC)));
    assert_eq!(parse_timestamp("yesterday"), None);
}

#[test]
fn format_date_shows_calendar_day() {
    assert_eq!(format_date(Some("2024-01-10T12:00:00.000Z")), "2024-01-10");
    assert_eq!(format_date(None), "N/A");
    assert_eq!(format_date(Some("garbage")), "N/A");
}

#[test]
fn format_date_time_normalizes_to_utc() {
    assert_eq!(format_date_time(Some("2024-01-10T09:15:00-03:00")), "2024-01-10 12:15 UTC");
    assert_eq!(format_date_time(None), "N/A");
}

#[test]
fn recent_login_is_active() {
    let user = make_user(Some("2020-01-01T00:00:00Z"), Some("2024-06-20T00:00:00Z"));
    assert!(!is_inactive(&user, NOW));
}

#[test]
fn old_login_is_inactive() {
    let user = make_user(Some("2024-06-29T00:00:00Z"), Some("2024-05-01T00:00:00Z"));
    assert!(is_inactive(&user, NOW));
}

#[test]
fn creation_date_used_when_never_logged_in() {
    assert!(is_inactive(&make_user(Some("2024-01-01T00:00:00Z"), None), NOW));
    assert!(!is_inactive(&make_user(Some("2024-06-25T00:00:00Z"), None), NOW));
}

#[test]
fn missing_dates_are_never_inactive() {
    assert!(!is_inactive(&make_user(None, None), NOW));
    assert!(!is_inactive(&make_user(Some("2000-01-01T00:00:00Z"), Some("not a date")), NOW));
}

#[test]
fn exactly_thirty_days_is_still_active() {
    let user = make_user(None, Some("2024-05-31T12:00:00Z"));
    assert!(!is_inactive(&user, NOW));
}
