use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};

/// Returns the calendar day that `at` falls on in the reference timezone.
///
/// Instants are stored in UTC, but "which school day was this" depends on the
/// school's local clock. An evening mark in a timezone far east of UTC can
/// belong to the next calendar day.
pub fn day_in_tz(at: DateTime<Utc>, timezone: FixedOffset) -> NaiveDate {
    at.with_timezone(&timezone).date_naive()
}

/// Returns the UTC instant at which `day` begins in the reference timezone.
///
/// Used as the rollover cutoff: marks strictly before this instant belong to
/// an earlier school day.
pub fn day_start_utc(day: NaiveDate, timezone: FixedOffset) -> DateTime<Utc> {
    let local_midnight = day.and_time(NaiveTime::MIN);
    let utc_naive = local_midnight - Duration::seconds(timezone.local_minus_utc() as i64);

    DateTime::from_naive_utc_and_offset(utc_naive, Utc)
}
