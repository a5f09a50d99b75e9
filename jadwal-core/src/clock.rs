use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use time::Time;

use crate::view::class::ResolvedPeriod;

/// Fixed teaching slot length. The end time a dataset states is ignored.
pub const PERIOD_MINUTES: u16 = 40;

static START_TIME_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new("^(\\d{1,2}):(\\d{2}) - ").unwrap());

/// Index of the period running at `now`, if any. Entries whose time field
/// has no parseable start are skipped.
pub fn current_period(schedule: &[ResolvedPeriod], now: Time) -> Option<usize> {
  let now = now.hour() as u16 * 60 + now.minute() as u16;

  schedule.iter().position(|entry| {
    let captures = match START_TIME_REGEX.captures(&entry.time) {
      Some(captures) => captures,
      None => return false,
    };

    let hour = u16::from_str(captures.get(1).unwrap().as_str()).unwrap();
    let minute = u16::from_str(captures.get(2).unwrap().as_str()).unwrap();
    let start = hour * 60 + minute;

    start <= now && now < start + PERIOD_MINUTES
  })
}
