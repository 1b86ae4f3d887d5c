//! Daily schedule arithmetic.

use chrono::{DateTime, Duration, NaiveTime, TimeZone};

/// Next occurrence of `hour:minute` local time strictly after `now`.
///
/// Scans today and the following two days so a local time swallowed by
/// a DST transition is skipped rather than looped on.
pub fn next_scheduled_run<Tz: TimeZone>(
    now: &DateTime<Tz>,
    hour: u32,
    minute: u32,
) -> DateTime<Tz> {
    let tz = now.timezone();
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
    let today = now.date_naive();

    for day_offset in 0..=2 {
        let date = today + Duration::days(day_offset);
        if let Some(candidate) = tz.from_local_datetime(&date.and_time(time)).earliest() {
            if &candidate > now {
                return candidate;
            }
        }
    }

    now.clone() + Duration::days(1)
}
