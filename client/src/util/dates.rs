//! Timestamp display and the admin listing's inactivity rule.
//!
//! The API sends RFC 3339 strings. Anything that fails to parse is shown as
//! "N/A" and never counts as inactive.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Duration, OffsetDateTime};

use crate::net::types::User;

/// Users whose last activity is older than this are flagged inactive.
pub const INACTIVE_AFTER_DAYS: i64 = 30;

const NOT_AVAILABLE: &str = "N/A";

#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Rfc3339).ok()
}

/// `YYYY-MM-DD`, or "N/A".
#[must_use]
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .and_then(|t| t.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

/// `YYYY-MM-DD HH:MM` (UTC), or "N/A".
#[must_use]
pub fn format_date_time(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|t| t.to_offset(time::UtcOffset::UTC))
        .and_then(|t| t.format(format_description!("[year]-[month]-[day] [hour]:[minute] UTC")).ok())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

/// Inactive when the last login, or the creation date for users who never
/// logged in, is more than [`INACTIVE_AFTER_DAYS`] before `now`.
#[must_use]
pub fn is_inactive(user: &User, now: OffsetDateTime) -> bool {
    let cutoff = now - Duration::days(INACTIVE_AFTER_DAYS);
    user.last_login_at
        .as_deref()
        .or(user.created_at.as_deref())
        .and_then(parse_timestamp)
        .is_some_and(|t| t < cutoff)
}
