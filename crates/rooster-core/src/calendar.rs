// ── Calendar derivations ──
//
// Pure date math behind the schedule screen: the seven-day strip around
// a pivot date, the month label, and one-month navigation.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;
use strum::{Display, EnumString};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Sunday-first, matching `Weekday::num_days_from_sunday`.
const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Days shown before the pivot in the strip.
pub const DAYS_BEFORE: u64 = 2;
/// Days shown after the pivot in the strip.
pub const DAYS_AFTER: u64 = 4;
/// Total strip length.
pub const WEEK_LEN: usize = 7;

/// One day of the week strip, derived from a pivot date.
///
/// Regenerated whole whenever the pivot (or the shift data behind
/// `has_event`) changes; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayItem {
    /// Day of month.
    pub date: u32,
    /// Three-letter English day name.
    pub day: &'static str,
    pub is_selected: bool,
    pub has_event: bool,
    pub full_date: NaiveDate,
}

/// Direction for [`shift_month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MonthDirection {
    Prev,
    Next,
}

/// English name of the date's month.
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Three-letter English name of the date's weekday.
pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// `"<MonthName>, <Year>"`, e.g. `"January, 2024"`.
pub fn month_label(date: NaiveDate) -> String {
    format!("{}, {}", month_name(date), date.year())
}

/// Build the strip for offsets -2..=+4 around `pivot`.
///
/// `has_event` is asked once per day. The strip always has
/// [`WEEK_LEN`] days with `pivot` selected; within a few days of chrono's
/// range limits the window slides inward instead of running off the end.
pub fn generate_week_days(pivot: NaiveDate, has_event: impl Fn(NaiveDate) -> bool) -> Vec<DayItem> {
    std::iter::successors(Some(window_start(pivot)), |d| d.succ_opt())
        .take(WEEK_LEN)
        .map(|full_date| DayItem {
            date: full_date.day(),
            day: day_name(full_date),
            is_selected: full_date == pivot,
            has_event: has_event(full_date),
            full_date,
        })
        .collect()
}

/// First day of the strip around `pivot`, kept far enough from both ends
/// of the calendar for a full week to fit.
fn window_start(pivot: NaiveDate) -> NaiveDate {
    let latest = NaiveDate::MAX
        .checked_sub_days(Days::new(DAYS_BEFORE + DAYS_AFTER))
        .unwrap_or(NaiveDate::MIN);
    pivot
        .checked_sub_days(Days::new(DAYS_BEFORE))
        .unwrap_or(NaiveDate::MIN)
        .min(latest)
}

/// Move one calendar month from `date`.
///
/// Day-of-month is kept where valid and clamped to the last day of the
/// target month otherwise (Jan 31 → Feb 29 in 2024). Returns `None` only
/// when the result is outside chrono's range.
pub fn shift_month(date: NaiveDate, direction: MonthDirection) -> Option<NaiveDate> {
    let one = Months::new(1);
    match direction {
        MonthDirection::Prev => date.checked_sub_months(one),
        MonthDirection::Next => date.checked_add_months(one),
    }
}
