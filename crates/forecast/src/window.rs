//! 24-hour window selection over the raw sample series.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use common::config::WindowMode;
use common::{Error, ForecastSample, ForecastWindow, Result};

/// Resolve a naive local datetime in `tz`.
///
/// Ambiguous local times (DST fold) take the earlier offset; times inside
/// a DST gap are shifted forward one hour.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
}

fn local_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Select the contiguous 24-hour window of samples for summarization.
///
/// * `CalendarDay` — midnight-to-midnight of `now`'s local date; labels
///   with the window start date.
/// * `Rolling` — starts at the next 3-hour boundary strictly after `now`
///   (rolling to next-day midnight past 21h); labels with `now`'s local
///   date regardless of where the window starts.
///
/// Samples are filtered to `start <= timestamp < end` in their original
/// order. An empty result is `Error::NoData`.
pub fn select_window<Tz: TimeZone>(
    samples: &[ForecastSample],
    now: &DateTime<Tz>,
    mode: WindowMode,
) -> Result<ForecastWindow> {
    let tz = now.timezone();
    let today = now.date_naive();

    let (start_naive, label_date) = match mode {
        WindowMode::CalendarDay => (local_midnight(today), today),
        WindowMode::Rolling => {
            let slot = (now.hour() / 3 + 1) * 3;
            let start = if slot >= 24 {
                local_midnight(today + Duration::days(1))
            } else {
                local_midnight(today) + Duration::hours(i64::from(slot))
            };
            (start, today)
        }
    };

    let start = resolve_local(&tz, start_naive)
        .ok_or_else(|| Error::NoData(format!("unresolvable local window start {start_naive}")))?
        .with_timezone(&Utc);
    let end = start + Duration::hours(24);

    let selected: Vec<ForecastSample> = samples
        .iter()
        .filter(|s| s.timestamp >= start && s.timestamp < end)
        .cloned()
        .collect();

    if selected.is_empty() {
        return Err(Error::NoData(format!(
            "no samples between {start} and {end}"
        )));
    }

    Ok(ForecastWindow {
        start,
        end,
        label_date,
        samples: selected,
    })
}
